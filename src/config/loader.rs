//! Configuration loading and validation

use crate::config::types::{ConfigFormat, Placeholders};
use crate::constants::{CONFIG_EXTENSIONS, LOCK_FILE};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use serde::Deserialize;
use std::path::{Component, Path};

/// Everything that describes the template being initialised.
///
/// Built once at startup and passed by reference to every step.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub placeholders: Placeholders,
    /// Directory names ignored in addition to the built-in set.
    pub ignore_dirs: Vec<String>,
    /// File names ignored in addition to the built-in set.
    pub ignore_files: Vec<String>,
    /// Root-relative glob patterns to ignore.
    pub ignore_globs: Vec<String>,
    pub lock_file: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            placeholders: Placeholders::default(),
            ignore_dirs: Vec::new(),
            ignore_files: Vec::new(),
            ignore_globs: Vec::new(),
            lock_file: LOCK_FILE.to_string(),
        }
    }
}

impl TemplateConfig {
    /// Loads the configuration from `config_file`, or returns the built-in one.
    pub fn resolve(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::load_config(path),
            None => {
                log::debug!("No configuration file given, using built-in placeholders.");
                Ok(Self::default())
            }
        }
    }

    pub fn load_config<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();
        if !config_file.is_file() {
            return Err(Error::ConfigNotFound {
                config_file: config_file.display_string(),
            });
        }

        let format = config_file
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ConfigFormat::from_extension)
            .ok_or_else(|| Error::ConfigFormatError {
                config_file: config_file.display_string(),
                formats: CONFIG_EXTENSIONS.join(", "),
            })?;

        let content = std::fs::read_to_string(config_file)?;
        let config: TemplateConfig = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
        };
        config.validate()?;

        log::info!("Loaded configuration from {}", config_file.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.placeholders.entries() {
            if value.is_empty() {
                return Err(Error::ConfigValidation(format!(
                    "placeholder '{key}' must not be empty"
                )));
            }
        }

        if !is_plain_file_name(&self.lock_file) {
            return Err(Error::ConfigValidation(format!(
                "lock_file '{}' must be a plain file name",
                self.lock_file
            )));
        }

        if let Some(name) = self
            .ignore_dirs
            .iter()
            .chain(self.ignore_files.iter())
            .find(|name| !is_plain_file_name(name))
        {
            return Err(Error::ConfigValidation(format!(
                "ignore entry '{name}' must be a plain name, use ignore_globs for paths"
            )));
        }
        Ok(())
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
