//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated content tree with a config file
//! - Writing project documents per locale
//! - Executing CLI commands against that tree

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::ProjectFixture;

const DEFAULT_CONFIG: &str = r#"content_root = "content"
default_locale = "fr"
locales = ["fr", "en"]
"#;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use folio_testing::{ProjectFixture, TestWorld};
///
/// let world = TestWorld::new()
///     .with_project("fr", ProjectFixture::new("alpha", "2024-03-01"));
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    content_root: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with default locales fr (default) and en.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let content_root = base_path.join("content");
        let config_path = base_path.join("folio.toml");

        std::fs::create_dir_all(&content_root).expect("Failed to create content root");
        std::fs::write(&config_path, DEFAULT_CONFIG).expect("Failed to write config");

        Self {
            temp_dir,
            content_root,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Get the content root directory path.
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Get the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Replace the config file contents.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Create an (empty) locale collection directory.
    pub fn with_locale(self, locale: &str) -> Self {
        std::fs::create_dir_all(self.content_root.join(locale))
            .expect("Failed to create locale dir");
        self
    }

    /// Write a project document into a locale collection.
    pub fn with_project(self, locale: &str, fixture: ProjectFixture) -> Self {
        let file_name = format!("{}.mdx", fixture.slug());
        self.write_raw(locale, &file_name, &fixture.to_document())
            .expect("Failed to write project");
        self
    }

    /// Write an arbitrary file into a locale collection.
    pub fn write_raw(&self, locale: &str, file_name: &str, contents: &str) -> Result<()> {
        let dir = self.content_root.join(locale);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join(file_name), contents)?;
        Ok(())
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("FOLIO_CONTENT_DIR");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built (which cargo test does automatically for the CLI crate).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("folio")
            .map_err(|e| anyhow::anyhow!("Failed to find folio binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute a command with `--format json` appended.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut all: Vec<&str> = args.to_vec();
        all.extend(["--format", "json"]);
        self.run(&all)
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
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
