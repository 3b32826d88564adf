//! Steps that run after the file contents have been rewritten.

use crate::{constants::SOURCE_ROOT, error::Error};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { source: PathBuf, target: PathBuf },
    TargetExists { target: PathBuf },
    /// Nothing to rename, typically because a previous run already did.
    SourceMissing { source: PathBuf },
    Failed { source: PathBuf, target: PathBuf, error: Error },
}

impl RenameOutcome {
    pub fn is_warning(&self) -> bool {
        !matches!(self, RenameOutcome::Renamed { .. })
    }

    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };
        match self {
            RenameOutcome::Renamed { source, target } => format!(
                "{}Renamed directory: {} -> {}",
                prefix,
                source.display(),
                target.display()
            ),
            RenameOutcome::TargetExists { target } => format!(
                "{}Target directory already exists, skipping rename: {}",
                prefix,
                target.display()
            ),
            RenameOutcome::SourceMissing { source } => format!(
                "{}Source directory not found: {} (Already renamed?)",
                prefix,
                source.display()
            ),
            RenameOutcome::Failed { source, target, error } => format!(
                "{}Failed to rename {} -> {}: {}",
                prefix,
                source.display(),
                target.display(),
                error
            ),
        }
    }
}

/// Renames `src/<old_package>` to `src/<new_package>` under `root`.
///
/// Never overwrites an existing target and never fails the run.
pub fn rename_source_dir(
    root: &Path,
    old_package: &str,
    new_package: &str,
    dry_run: bool,
) -> RenameOutcome {
    let source = root.join(SOURCE_ROOT).join(old_package);
    let target = root.join(SOURCE_ROOT).join(new_package);

    if !source.exists() {
        return RenameOutcome::SourceMissing { source };
    }
    if target.exists() {
        return RenameOutcome::TargetExists { target };
    }

    if !dry_run {
        if let Err(e) = std::fs::rename(&source, &target) {
            return RenameOutcome::Failed { source, target, error: Error::IoError(e) };
        }
    }
    RenameOutcome::Renamed { source, target }
}

#[derive(Debug)]
pub enum LockFileOutcome {
    Removed { path: PathBuf },
    Absent { path: PathBuf },
    Failed { path: PathBuf, error: Error },
}

impl LockFileOutcome {
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };
        match self {
            LockFileOutcome::Removed { path } => {
                format!("{}Removed old {}", prefix, path.display())
            }
            LockFileOutcome::Absent { path } => {
                format!("{}No {} to remove", prefix, path.display())
            }
            LockFileOutcome::Failed { path, error } => {
                format!("{}Failed to remove {}: {}", prefix, path.display(), error)
            }
        }
    }
}

/// Deletes the lock file at `root` if there is one.
pub fn remove_lock_file(root: &Path, lock_file: &str, dry_run: bool) -> LockFileOutcome {
    let path = root.join(lock_file);
    if !path.exists() {
        return LockFileOutcome::Absent { path };
    }

    if !dry_run {
        if let Err(e) = std::fs::remove_file(&path) {
            return LockFileOutcome::Failed { path, error: Error::IoError(e) };
        }
    }
    LockFileOutcome::Removed { path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn renames_package_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/my_package")).unwrap();
        fs::write(dir.path().join("src/my_package/__init__.py"), "").unwrap();

        let outcome = rename_source_dir(dir.path(), "my_package", "my_awesome_tool", false);
        assert!(matches!(outcome, RenameOutcome::Renamed { .. }));
        assert!(!outcome.is_warning());
        assert!(!dir.path().join("src/my_package").exists());
        assert!(dir.path().join("src/my_awesome_tool/__init__.py").exists());
    }

    #[test]
    fn missing_source_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let outcome = rename_source_dir(dir.path(), "my_package", "tool", false);
        assert!(matches!(outcome, RenameOutcome::SourceMissing { .. }));
        assert!(outcome.is_warning());
        assert!(outcome.get_message(false).contains("Already renamed?"));
    }

    #[test]
    fn existing_target_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/my_package")).unwrap();
        fs::create_dir_all(dir.path().join("src/tool")).unwrap();
        fs::write(dir.path().join("src/tool/keep.py"), "keep").unwrap();

        let outcome = rename_source_dir(dir.path(), "my_package", "tool", false);
        assert!(matches!(outcome, RenameOutcome::TargetExists { .. }));
        assert!(dir.path().join("src/my_package").exists());
        assert_eq!(fs::read_to_string(dir.path().join("src/tool/keep.py")).unwrap(), "keep");
    }

    #[test]
    fn same_name_counts_as_existing_target() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/my_package")).unwrap();
        let outcome = rename_source_dir(dir.path(), "my_package", "my_package", false);
        assert!(matches!(outcome, RenameOutcome::TargetExists { .. }));
    }

    #[test]
    fn dry_run_rename_leaves_tree_alone() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/my_package")).unwrap();
        let outcome = rename_source_dir(dir.path(), "my_package", "tool", true);
        assert!(matches!(outcome, RenameOutcome::Renamed { .. }));
        assert!(outcome.get_message(true).starts_with("[DRY RUN] "));
        assert!(dir.path().join("src/my_package").exists());
        assert!(!dir.path().join("src/tool").exists());
    }

    #[test]
    fn removes_lock_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("uv.lock"), "version = 1").unwrap();
        let outcome = remove_lock_file(dir.path(), "uv.lock", false);
        assert!(matches!(outcome, LockFileOutcome::Removed { .. }));
        assert!(!dir.path().join("uv.lock").exists());
    }

    #[test]
    fn absent_lock_file_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let outcome = remove_lock_file(dir.path(), "uv.lock", false);
        assert!(matches!(outcome, LockFileOutcome::Absent { .. }));
    }

    #[test]
    fn dry_run_keeps_lock_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("uv.lock"), "version = 1").unwrap();
        let outcome = remove_lock_file(dir.path(), "uv.lock", true);
        assert!(matches!(outcome, LockFileOutcome::Removed { .. }));
        assert!(dir.path().join("uv.lock").exists());
    }
}
