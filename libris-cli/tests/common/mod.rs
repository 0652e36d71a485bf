//! Shared setup for the `libris` binary tests: a throwaway data directory
//! and command builders that point at it.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const ISOLATED_VARS: [&str; 6] = [
    "LIBRIS_DATA_DIR",
    "LIBRIS_BUSY_TIMEOUT",
    "LIBRIS_USER",
    "LIBRIS_LOG_MODE",
    "LIBRIS_DEFAULT_USER",
    "LIBRIS_OUTPUT_FORMAT",
];

/// A data directory inside a temp dir that lives as long as the value.
pub struct TestEnv {
    _temp_dir: TempDir,
    /// The directory passed as `--data-dir`.
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// The data directory is not created; libris creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("libris-data");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// The binary with host `LIBRIS_*` variables removed and no `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("libris").expect("Failed to find libris binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// The binary pointed at this environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the catalog database.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("libris.db")
    }

    /// Path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("logs").join("libris.log")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Run a command that must succeed and return its stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run libris");

        assert!(
            output.status.success(),
            "libris {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Add a book.
    pub fn add_book(&self, title: &str, author: &str, category: Option<&str>) {
        let mut args = vec!["add", title, author];
        args.extend(category);
        self.run(&args);
    }

    /// Stdout of `libris list`.
    pub fn list(&self) -> String {
        self.run(&["list"])
    }
}
