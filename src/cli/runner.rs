use crate::{
    answers::{AnswerCollector, Answers, PresetAnswers},
    cleanup::{remove_lock_file, rename_source_dir, LockFileOutcome, RenameOutcome},
    cli::Args,
    config::TemplateConfig,
    error::{Error, Result},
    ext::PathExt,
    ignore::IgnoreRules,
    prompt::{AnswerSource, DialoguerPrompter},
    replacements::ReplacementTable,
    template::{TreeProcessor, WalkSummary},
};
use std::path::{Path, PathBuf};

const NEXT_STEPS: &[&str] = &[
    "1. Run `uv sync` to install dependencies and regenerate lock file.",
    "2. Run `uv run pytest` to ensure tests pass.",
    "3. Delete this script: `rm init_project.py`",
    "4. Initialize git: `git init && git add . && git commit -m 'Initial commit'`",
];

/// Everything a run did, step by step.
#[derive(Debug)]
pub struct RunSummary {
    pub root: PathBuf,
    pub answers: Answers,
    pub files: WalkSummary,
    pub rename: RenameOutcome,
    pub lock_file: LockFileOutcome,
}

/// Main CLI runner that orchestrates the whole initialisation
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs with the terminal prompter, or without prompting when
    /// `--non-interactive` is set.
    pub fn run(self) -> Result<RunSummary> {
        if self.args.non_interactive {
            self.run_with(None)
        } else {
            let prompter = DialoguerPrompter::new();
            self.run_with(Some(&prompter))
        }
    }

    /// Executes every step, taking interactive answers from `source`.
    pub fn run_with(&self, source: Option<&dyn AnswerSource>) -> Result<RunSummary> {
        let root = self.project_root()?;
        let config = TemplateConfig::resolve(self.args.config.as_deref())?;
        let mut ignore = IgnoreRules::from_config(&config)?;
        if let Some(relative) = self.config_file_in_root(&root) {
            ignore.skip_path(relative);
        }
        let presets = PresetAnswers::from_arg(self.args.answers.as_deref())?;

        if source.is_some() {
            println!("\nInitializing new project. Please provide the following details:");
        }
        let answers = AnswerCollector::new(source, presets).collect_answers()?;
        let table = ReplacementTable::build(&config.placeholders, &answers);
        log::debug!("Replacement table: {table:?}");

        println!("\nReplacing content in files...");
        let files = TreeProcessor::new(&root, &table, &ignore, self.args.dry_run)
            .process_all_files()?;

        println!("\nRenaming source directory...");
        let rename = rename_source_dir(
            &root,
            &config.placeholders.package_name,
            &answers.package_name,
            self.args.dry_run,
        );
        let message = rename.get_message(self.args.dry_run);
        if rename.is_warning() {
            log::warn!("{message}");
            println!("Warning: {message}");
        } else {
            println!("{message}");
        }

        println!("\nCleaning up environment...");
        let lock_file = remove_lock_file(&root, &config.lock_file, self.args.dry_run);
        let message = lock_file.get_message(self.args.dry_run);
        match &lock_file {
            LockFileOutcome::Removed { .. } => println!("{message}"),
            LockFileOutcome::Absent { .. } => log::debug!("{message}"),
            LockFileOutcome::Failed { .. } => {
                log::warn!("{message}");
                println!("Warning: {message}");
            }
        }

        self.print_completion(&files);
        Ok(RunSummary { root, answers, files, rename, lock_file })
    }

    fn project_root(&self) -> Result<PathBuf> {
        let root = match &self.args.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        if !root.is_dir() {
            return Err(Error::ProjectRootError { root: root.display_string() });
        }
        Ok(root)
    }

    /// The configuration file's path relative to `root`, when it lives inside
    /// the project. It holds the placeholder literals and must not be rewritten.
    fn config_file_in_root(&self, root: &Path) -> Option<PathBuf> {
        let config_file = self.args.config.as_ref()?.canonicalize().ok()?;
        let root = root.canonicalize().ok()?;
        config_file.strip_prefix(&root).ok().map(Path::to_path_buf)
    }

    fn print_completion(&self, files: &WalkSummary) {
        println!("\nInitialization Complete!");
        println!(
            "{} files scanned, {} updated, {} binary skipped, {} failed.",
            files.scanned, files.updated, files.skipped_binary, files.failed
        );
        if self.args.dry_run {
            println!("Dry run: nothing was written.");
        }
        println!("{}", "-".repeat(50));
        println!("Next Steps:");
        for step in NEXT_STEPS {
            println!("{step}");
        }
        println!("{}", "-".repeat(50));
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<RunSummary> {
    Runner::new(args).run()
}
