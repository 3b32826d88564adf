//! User input handling
//!
//! The module is structured in layers:
//! - this file: the questions, default resolution and the abstract `AnswerSource`
//! - `dialoguer`: concrete terminal implementation using the dialoguer library

use crate::error::Result;
use std::fmt::Display;

pub mod dialoguer;

pub use self::dialoguer::DialoguerPrompter;

/// The values asked from the user, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKey {
    ProjectName,
    PackageName,
    AuthorName,
    AuthorEmail,
    GithubUsername,
}

impl AnswerKey {
    pub const ALL: [AnswerKey; 5] = [
        AnswerKey::ProjectName,
        AnswerKey::PackageName,
        AnswerKey::AuthorName,
        AnswerKey::AuthorEmail,
        AnswerKey::GithubUsername,
    ];

    /// Key used in preset answers documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::ProjectName => "project_name",
            AnswerKey::PackageName => "package_name",
            AnswerKey::AuthorName => "author_name",
            AnswerKey::AuthorEmail => "author_email",
            AnswerKey::GithubUsername => "github_username",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        AnswerKey::ALL.into_iter().find(|answer_key| answer_key.as_str() == key)
    }

    /// Text shown in front of the interactive prompt.
    pub fn label(&self) -> &'static str {
        match self {
            AnswerKey::ProjectName => "1. New Project Name (e.g., my-awesome-tool)",
            AnswerKey::PackageName => "2. New Package Name (import name)",
            AnswerKey::AuthorName => "3. Author Name",
            AnswerKey::AuthorEmail => "4. Author Email",
            AnswerKey::GithubUsername => "5. GitHub Username",
        }
    }
}

impl Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single question together with the value used when it is left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: AnswerKey,
    pub default: String,
}

impl Question {
    pub fn new(key: AnswerKey, default: impl Into<String>) -> Self {
        Self { key, default: default.into() }
    }

    /// Prompt text with the default in brackets.
    pub fn prompt_text(&self) -> String {
        format!("{} [{}]", self.key.label(), self.default)
    }

    pub fn resolve(&self, raw: Option<&str>) -> String {
        resolve_answer(raw, &self.default)
    }
}

/// Trims the raw input and falls back to `default` when nothing is left.
pub fn resolve_answer(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Something that can answer a question with raw, unresolved text.
pub trait AnswerSource {
    fn ask(&self, question: &Question) -> Result<String>;
}
