//! Dialoguer-based implementation of `AnswerSource`

use super::{AnswerSource, Question};
use crate::error::Result;
use dialoguer::Input;

/// Asks questions on the terminal, one line each.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerSource for DialoguerPrompter {
    fn ask(&self, question: &Question) -> Result<String> {
        // Empty input is accepted here and resolved by the caller.
        Ok(Input::<String>::new()
            .with_prompt(question.prompt_text())
            .allow_empty(true)
            .interact_text()?)
    }
}
