//! Constants used throughout template-init

/// Placeholder literals shipped in the template files.
pub mod placeholders {
    pub const PACKAGE_NAME: &str = "my_package";
    pub const PROJECT_NAME: &str = "python-template";
    pub const AUTHOR_NAME: &str = "Algieba-dean";
    pub const AUTHOR_EMAIL: &str = "algieba.king@gmail.com";
    pub const GITHUB_USERNAME: &str = "Algieba-dean";
    pub const REPO_NAME: &str = "modern-python-template";
}

/// Values used when an answer is left empty.
pub mod defaults {
    pub const PROJECT_NAME: &str = "my-awesome-tool";
    pub const AUTHOR_NAME: &str = "Your Name";
    pub const AUTHOR_EMAIL: &str = "your.email@example.com";
    pub const GITHUB_USERNAME: &str = "your-github-user";
}

/// Directory names that are never descended into.
pub const IGNORE_DIRS: &[&str] = &[
    ".git",
    ".venv",
    ".mypy_cache",
    ".ruff_cache",
    "__pycache__",
    "site",
    "dist",
    "build",
    ".idea",
    ".vscode",
];

/// File names that are never rewritten.
pub const IGNORE_FILES: &[&str] = &["uv.lock", "init_project.py", ".DS_Store"];

/// Lock file removed so dependencies are resolved again under the new name.
pub const LOCK_FILE: &str = "uv.lock";

/// Directory holding the package sources.
pub const SOURCE_ROOT: &str = "src";

/// Configuration file extensions and the format they select.
pub const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
