use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk the project tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to parse ignore pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to read user input. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Configuration file '{config_file}' does not exist.")]
    ConfigNotFound { config_file: String },

    #[error("Unsupported configuration format '{config_file}'. Expected one of: {formats}.")]
    ConfigFormatError { config_file: String, formats: String },

    /// The configuration parsed but describes something unusable.
    #[error("Configuration validation error: {0}.")]
    ConfigValidation(String),

    /// Preset answers were supplied but could not be interpreted.
    #[error("Invalid answers: {0}.")]
    AnswersError(String),

    #[error("Cannot proceed: project root '{root}' is not a directory.")]
    ProjectRootError { root: String },
}

/// Convenience type alias for Results with the crate's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
