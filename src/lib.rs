/// Handles argument parsing and runs the initialisation steps.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across the crate.
pub mod constants;

/// Template configuration: placeholders, ignore sets, lock file.
pub mod config;

/// Decides which paths are left untouched.
pub mod ignore;

/// User input and interaction handling.
pub mod prompt;

/// Collects the new project identity.
pub mod answers;

/// The ordered placeholder substitutions.
pub mod replacements;

/// Rewrites files in place across the project tree.
pub mod template;

/// Source directory rename and lock file removal.
pub mod cleanup;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Extension traits for standard library types.
pub mod ext;
