//! Basic types used by the configuration system

use crate::constants::placeholders;
use serde::Deserialize;

/// Literal values that the template files ship with and that get replaced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    /// Folder name under `src/` and the import name.
    pub package_name: String,
    /// Distribution name, as in `name = "..."` in pyproject.toml.
    pub project_name: String,
    pub author_name: String,
    pub author_email: String,
    /// Owner part of GitHub URLs.
    pub github_username: String,
    /// Repository name used by README badges.
    pub repo_name: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            package_name: placeholders::PACKAGE_NAME.to_string(),
            project_name: placeholders::PROJECT_NAME.to_string(),
            author_name: placeholders::AUTHOR_NAME.to_string(),
            author_email: placeholders::AUTHOR_EMAIL.to_string(),
            github_username: placeholders::GITHUB_USERNAME.to_string(),
            repo_name: placeholders::REPO_NAME.to_string(),
        }
    }
}

impl Placeholders {
    /// Field names paired with their values, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("package_name", self.package_name.as_str()),
            ("project_name", self.project_name.as_str()),
            ("author_name", self.author_name.as_str()),
            ("author_email", self.author_email.as_str()),
            ("github_username", self.github_username.as_str()),
            ("repo_name", self.repo_name.as_str()),
        ]
    }
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}
