use crate::{
    error::Result,
    ext::PathExt,
    ignore::IgnoreRules,
    ioutils::{read_text, write_file},
    replacements::ReplacementTable,
    template::operation::FileOutcome,
};
use std::path::Path;
use walkdir::WalkDir;

/// Rewrites a single file in place.
///
/// Binary files are skipped silently. The file is only written when the
/// content actually changed, and never in dry-run mode.
pub fn rewrite_file(path: &Path, table: &ReplacementTable, dry_run: bool) -> FileOutcome {
    let path_buf = path.to_path_buf();
    let content = match read_text(path) {
        Ok(Some(content)) => content,
        Ok(None) => return FileOutcome::SkippedBinary { path: path_buf },
        Err(error) => return FileOutcome::Failed { path: path_buf, error },
    };

    let rewritten = table.apply(&content);
    if rewritten == content {
        return FileOutcome::Unchanged { path: path_buf };
    }

    if !dry_run {
        if let Err(error) = write_file(&rewritten, path) {
            return FileOutcome::Failed { path: path_buf, error };
        }
    }
    FileOutcome::Updated { path: path_buf }
}

/// Counters collected while walking the tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkSummary {
    pub scanned: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped_binary: usize,
    pub failed: usize,
}

impl WalkSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        self.scanned += 1;
        match outcome {
            FileOutcome::Updated { .. } => self.updated += 1,
            FileOutcome::Unchanged { .. } => self.unchanged += 1,
            FileOutcome::SkippedBinary { .. } => self.skipped_binary += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Walks the project root and rewrites every file that is not ignored.
pub struct TreeProcessor<'a> {
    root: &'a Path,
    table: &'a ReplacementTable,
    ignore: &'a IgnoreRules,
    dry_run: bool,
}

impl<'a> TreeProcessor<'a> {
    pub fn new(
        root: &'a Path,
        table: &'a ReplacementTable,
        ignore: &'a IgnoreRules,
        dry_run: bool,
    ) -> Self {
        Self { root, table, ignore, dry_run }
    }

    /// Processes all files under the root.
    ///
    /// Per-file failures are reported and counted; only a failure of the walk
    /// itself is returned as an error.
    pub fn process_all_files(&self) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();

        let walker = WalkDir::new(self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let relative = entry.path().relative_to(self.root);
                let ignored = self.ignore.is_ignored(relative, entry.file_type().is_dir());
                if ignored {
                    log::debug!("Ignoring '{}'", relative.display());
                }
                !ignored
            });

        for dir_entry in walker {
            let entry = dir_entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let outcome = rewrite_file(entry.path(), self.table, self.dry_run);
            let message = outcome.get_message(self.dry_run);
            match &outcome {
                FileOutcome::Updated { .. } => println!("{message}"),
                FileOutcome::Failed { .. } => {
                    log::warn!("{message}");
                    println!("Warning: {message}");
                }
                _ => log::debug!("{message}"),
            }
            summary.record(&outcome);
        }

        log::info!(
            "Processing complete: {} files scanned, {} updated, {} binary skipped, {} failed",
            summary.scanned,
            summary.updated,
            summary.skipped_binary,
            summary.failed
        );
        Ok(summary)
    }
}
