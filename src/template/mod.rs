//! In-place template rewriting
//!
//! - `operation`: the outcome of rewriting a single file
//! - `processor`: rewriting one file and walking the project tree

pub mod operation;
pub mod processor;

pub use operation::FileOutcome;
pub use processor::{rewrite_file, TreeProcessor, WalkSummary};
