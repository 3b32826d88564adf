use crate::{
    constants::{defaults, STDIN_INDICATOR},
    error::{Error, Result},
    ioutils::read_from,
    prompt::{AnswerKey, AnswerSource, Question},
};
use serde_json::Value;
use std::collections::HashMap;

/// The new identity of the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub package_name: String,
    pub author_name: String,
    pub author_email: String,
    pub github_username: String,
}

/// Answers supplied up front through `--answers`.
#[derive(Debug, Default)]
pub struct PresetAnswers {
    values: HashMap<AnswerKey, String>,
}

impl PresetAnswers {
    /// Parses the `--answers` argument, reading stdin when it is `-`.
    pub fn from_arg(answers_arg: Option<&str>) -> Result<Self> {
        match answers_arg {
            None => Ok(Self::default()),
            Some(STDIN_INDICATOR) => Self::parse(&read_from(std::io::stdin())?),
            Some(json) => Self::parse(json),
        }
    }

    pub fn parse(buf: &str) -> Result<Self> {
        let map = match serde_json::from_str::<Value>(buf)? {
            Value::Object(map) => map,
            other => {
                return Err(Error::AnswersError(format!(
                    "expected a JSON object, got {other}"
                )))
            }
        };

        let mut values = HashMap::new();
        for (key, value) in map {
            let Some(answer_key) = AnswerKey::from_key(&key) else {
                log::debug!("Ignoring unknown answer key '{key}'");
                continue;
            };
            match value {
                Value::String(s) => {
                    values.insert(answer_key, s);
                }
                other => {
                    return Err(Error::AnswersError(format!(
                        "'{key}' must be a string, got {other}"
                    )))
                }
            }
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: AnswerKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }
}

/// Collects answers from presets, an interactive source, and defaults,
/// in that order of precedence.
pub struct AnswerCollector<'a> {
    source: Option<&'a dyn AnswerSource>,
    presets: PresetAnswers,
}

impl<'a> AnswerCollector<'a> {
    /// `source` is `None` in non-interactive mode.
    pub fn new(source: Option<&'a dyn AnswerSource>, presets: PresetAnswers) -> Self {
        Self { source, presets }
    }

    pub fn collect_answers(&self) -> Result<Answers> {
        let project_name =
            self.answer(&Question::new(AnswerKey::ProjectName, defaults::PROJECT_NAME))?;
        // Suggest an import name by swapping hyphens for underscores.
        let package_name = self.answer(&Question::new(
            AnswerKey::PackageName,
            project_name.replace('-', "_"),
        ))?;
        let author_name =
            self.answer(&Question::new(AnswerKey::AuthorName, defaults::AUTHOR_NAME))?;
        let author_email =
            self.answer(&Question::new(AnswerKey::AuthorEmail, defaults::AUTHOR_EMAIL))?;
        let github_username = self.answer(&Question::new(
            AnswerKey::GithubUsername,
            defaults::GITHUB_USERNAME,
        ))?;

        Ok(Answers { project_name, package_name, author_name, author_email, github_username })
    }

    fn answer(&self, question: &Question) -> Result<String> {
        let answer = if let Some(preset) = self.presets.get(question.key) {
            question.resolve(Some(preset))
        } else if let Some(source) = self.source {
            let raw = source.ask(question)?;
            question.resolve(Some(&raw))
        } else {
            question.resolve(None)
        };
        log::debug!("Answer for '{}': {answer}", question.key);
        Ok(answer)
    }
}
