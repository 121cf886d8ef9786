//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp data directory that is passed to the binary via
//! `--data-dir`, and strips the environment variables that would let a test
//! reach a real store or a real API.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use writerops_store::Store;
use writerops_types::{DailyRecord, Highlight};

const ISOLATED_ENV: &[&str] = &["WRITEROPS_PATH", "WRITEROPS_API_BASE", "ANTHROPIC_API_KEY", "RUST_LOG"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use writerops_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["finish", "--chars", "1200", "--difficulty", "2",
///     "--summary", "옥상 고백", "--date", "2026-02-09"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("writing");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Store over this world's data directory, for seeding and inspection.
    pub fn store(&self) -> Store {
        Store::open(&self.data_dir)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Enable the classifier against an address nothing listens on, so every
    /// call fails with a transport error.
    pub fn with_unreachable_classifier(self) -> Self {
        self.with_env("ANTHROPIC_API_KEY", "test-key")
            .with_env("WRITEROPS_API_BASE", "http://127.0.0.1:9")
    }

    /// Write daily records directly, bypassing `finish`.
    pub fn with_records(self, records: &[DailyRecord]) -> Self {
        let store = self.store();
        for record in records {
            store.save_record(record).expect("Failed to seed record");
        }
        self
    }

    pub fn with_highlights(self, highlights: &[Highlight]) -> Self {
        let store = self.store();
        for highlight in highlights {
            store
                .append_highlight(highlight)
                .expect("Failed to seed highlight");
        }
        self
    }

    /// Write `config.json` with the given goal and running total.
    pub fn with_progress(self, total_written: u64, monthly_goal: u64) -> Self {
        let config = serde_json::json!({
            "total_written": total_written,
            "monthly_goal": monthly_goal,
        });
        let text = serde_json::to_string_pretty(&config).expect("Failed to encode config");
        std::fs::write(self.data_dir.join("config.json"), text).expect("Failed to write config");
        self
    }

    /// Read a file under the data directory as text.
    pub fn read(&self, relative: impl AsRef<Path>) -> Result<String> {
        Ok(std::fs::read_to_string(self.data_dir.join(relative))?)
    }

    /// Paths of all files under `dir` (relative to the data directory), sorted.
    pub fn files_in(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.data_dir.join(dir))
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.current_dir(&self.data_dir);

        for key in ISOLATED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the binary with `args` and an empty stdin.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_input(args, "")
    }

    /// Run the binary with `args`, feeding `input` on stdin.
    ///
    /// Uses `Command::cargo_bin()`, which finds the binary built by
    /// `cargo test`.
    #[allow(deprecated)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("writerops")
            .map_err(|e| anyhow::anyhow!("Failed to find writerops binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(input.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
