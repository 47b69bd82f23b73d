//! Shared testing utilities for workflow-manager CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every artifact path in the built-in registry.
#[allow(dead_code)]
pub const DEFAULT_ARTIFACTS: [&str; 10] = [
    "climate_tweets2.jsonl",
    "climate_analysis.ipynb",
    "climate_llm_training_data.json",
    "covid_tweets2.jsonl",
    "covid_analysis.ipynb",
    "covid_llm_training_data.json",
    "tech_tweets2.jsonl",
    "tech_analysis.ipynb",
    "tech_llm_training_data.json",
    "tech_analysis_checkpoint.pkl",
];

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory the CLI runs in and dataset files are written to.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Scratch directory outside the work directory.
    pub fn outside_dir(&self) -> PathBuf {
        let dir = self.root.path().join("elsewhere");
        fs::create_dir_all(&dir).expect("Failed to create outside directory");
        dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("workflow-manager").expect("Failed to locate binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Write a file of `bytes` bytes relative to the work directory.
    pub fn write_sized(&self, relative: &str, bytes: usize) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, vec![b'x'; bytes]).expect("Failed to write test file");
        path
    }

    /// Create every artifact of the built-in registry with the given size.
    pub fn write_all_default_artifacts(&self, bytes: usize) {
        for artifact in DEFAULT_ARTIFACTS {
            self.write_sized(artifact, bytes);
        }
    }

    /// Write a registry file into the work directory and return its path.
    pub fn write_registry(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("registry.toml");
        fs::write(&path, content).expect("Failed to write registry");
        path
    }

    /// Run the binary with `args` and return stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.cli().args(args).output().expect("Failed to run binary");
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is not UTF-8")
    }
}
