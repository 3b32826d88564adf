use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for template-init.
///
/// Every flag is optional: with none of them the current directory is
/// initialised interactively.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project root to initialise (defaults to the current directory).
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Template configuration file (.json, .yaml or .yml).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Never prompt; use predefined answers or defaults.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
