use crate::{
    config::TemplateConfig,
    constants::{IGNORE_DIRS, IGNORE_FILES},
    error::Result,
};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

/// Decides which entries of the project tree are left alone.
#[derive(Debug)]
pub struct IgnoreRules {
    dirs: HashSet<String>,
    files: HashSet<String>,
    globs: GlobSet,
    /// Exact root-relative paths, such as a configuration file kept in the tree.
    paths: HashSet<PathBuf>,
}

impl IgnoreRules {
    /// Built-in names plus whatever the configuration adds.
    pub fn from_config(config: &TemplateConfig) -> Result<Self> {
        let dirs = IGNORE_DIRS
            .iter()
            .map(|name| name.to_string())
            .chain(config.ignore_dirs.iter().cloned())
            .collect();
        let files = IGNORE_FILES
            .iter()
            .map(|name| name.to_string())
            .chain(config.ignore_files.iter().cloned())
            .collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.ignore_globs {
            debug!("Adding ignore pattern: {pattern} to globset");
            builder.add(Glob::new(pattern)?);
        }

        Ok(Self { dirs, files, globs: builder.build()?, paths: HashSet::new() })
    }

    /// Leaves one more root-relative path untouched.
    pub fn skip_path(&mut self, relative: impl Into<PathBuf>) {
        let relative = relative.into();
        debug!("Adding ignored path: {}", relative.display());
        self.paths.insert(relative);
    }

    /// `relative` is the entry's path relative to the project root.
    ///
    /// An entry is ignored when any of its components is an ignored directory
    /// name, when it is a skipped path or matches an ignore glob, or, for
    /// files, when its name is an ignored file name.
    pub fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        let in_ignored_dir = relative.components().any(|component| match component {
            Component::Normal(part) => {
                part.to_str().is_some_and(|part| self.dirs.contains(part))
            }
            _ => false,
        });
        if in_ignored_dir || self.paths.contains(relative) || self.globs.is_match(relative) {
            return true;
        }

        !is_dir
            && relative
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| self.files.contains(name))
    }
}
