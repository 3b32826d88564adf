use std::path::{Path, PathBuf};

use crate::error::Error;

/// What happened to a single file during the rewrite.
#[derive(Debug)]
pub enum FileOutcome {
    /// At least one replacement matched and the new content was written.
    Updated { path: PathBuf },
    /// Text file without any placeholder.
    Unchanged { path: PathBuf },
    /// Not valid UTF-8, left byte-identical.
    SkippedBinary { path: PathBuf },
    Failed { path: PathBuf, error: Error },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Updated { path }
            | FileOutcome::Unchanged { path }
            | FileOutcome::SkippedBinary { path }
            | FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated { .. })
    }

    /// Gets a message describing the outcome.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            FileOutcome::Updated { path } => {
                format!("{}Updated: {}", prefix, path.display())
            }
            FileOutcome::Unchanged { path } => {
                format!("{}Unchanged: {}", prefix, path.display())
            }
            FileOutcome::SkippedBinary { path } => {
                format!("{}Skipping binary file: {}", prefix, path.display())
            }
            FileOutcome::Failed { path, error } => {
                format!("{}Error processing {}: {}", prefix, path.display(), error)
            }
        }
    }
}
