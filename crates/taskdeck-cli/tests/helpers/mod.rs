use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands against a temporary data directory
pub struct CliTestHarness {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with an isolated data directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("taskdeck-data");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskdeck").expect("Failed to find taskdeck binary");
        cmd.env("TASKDECK_DATA_DIR", &self.data_dir);
        cmd
    }

    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Adds a task and returns its full id, parsed from the command output
    pub fn add_task(&self, args: &[&str]) -> String {
        let mut full_args = vec!["add"];
        full_args.extend_from_slice(args);
        let output = self.run_success(&full_args).get_output().stdout.clone();
        extract_task_id(&String::from_utf8_lossy(&output))
    }
}

/// Strips ANSI escape sequences so styled output can be parsed
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Pulls the task id out of the `add` command's feedback
pub fn extract_task_id(output: &str) -> String {
    let plain = strip_ansi(output);
    plain
        .lines()
        .find_map(|line| line.split("Task ID:").nth(1))
        .map(|id| id.trim().to_string())
        .expect("output should contain a task id")
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains task table headers
    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Title"))
            .and(predicate::str::contains("Status"))
    }

    /// Predicate to check if output indicates successful task creation
    pub fn task_created_successfully() -> impl Predicate<str> {
        predicate::str::contains("Created task")
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
