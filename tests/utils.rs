#![allow(dead_code)]

use log::debug;
use std::fs;
use std::path::Path;
use template_init::cli::{Args, RunSummary, Runner};
use template_init::prompt::{AnswerSource, Question};
use walkdir::WalkDir;

pub const TEMPLATE_DIR: &str = "tests/templates/python_template";

pub const JANE_DOE_ANSWERS: &str = r#"{
    "project_name": "my-awesome-tool",
    "author_name": "Jane Doe",
    "author_email": "jane@example.com",
    "github_username": "janedoe"
}"#;

/// Copies the fixture template into a fresh temporary directory.
pub fn copy_template(template: &str) -> tempfile::TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    let template = Path::new(template);
    for entry in WalkDir::new(template).min_depth(1).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(template).unwrap();
        let dest = tmp_dir.path().join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).unwrap();
        } else {
            fs::create_dir_all(dest.parent().unwrap()).unwrap();
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
    tmp_dir
}

/// Non-interactive arguments rooted at `root`.
pub fn args_for(root: &Path, answers: Option<&str>) -> Args {
    Args {
        root: Some(root.to_path_buf()),
        config: None,
        answers: answers.map(|a| a.to_string()),
        non_interactive: true,
        dry_run: false,
        verbose: 2,
    }
}

pub fn run_in(root: &Path, answers: Option<&str>) -> RunSummary {
    Runner::new(args_for(root, answers)).run().unwrap()
}

/// Answers questions from a fixed list, in order.
pub struct ScriptedAnswers {
    responses: std::cell::RefCell<Vec<String>>,
}

impl ScriptedAnswers {
    pub fn new(responses: &[&str]) -> Self {
        let mut responses: Vec<String> = responses.iter().map(|s| s.to_string()).collect();
        responses.reverse();
        Self { responses: std::cell::RefCell::new(responses) }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn ask(&self, _question: &Question) -> template_init::error::Result<String> {
        Ok(self.responses.borrow_mut().pop().unwrap_or_default())
    }
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |dir: &Path| -> std::collections::HashSet<std::path::PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?} (only in expected)", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing the differences first.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Could not compare {actual:?} with {expected:?}");
        }
    }
}
