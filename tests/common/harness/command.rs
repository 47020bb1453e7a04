//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `sticky` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct StickyCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl StickyCommand {
    /// Creates a new command for the `sticky` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--dir` option to specify the data directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `XDG_CONFIG_HOME` at `path` so the user's config is never read.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("sticky").expect("Failed to find sticky binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(config_home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", config_home);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command with a message.
    pub fn add(self, message: &str) -> Self {
        self.args(["add", message])
    }

    /// Configures for the `read` command.
    pub fn read(self) -> Self {
        self.args(["read"])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `search` command with a query.
    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    /// Configures for the `update` command with an ID.
    pub fn update(self, id: &str) -> Self {
        self.args(["update", id])
    }

    /// Configures for the `rm` command with an ID.
    pub fn rm(self, id: &str) -> Self {
        self.args(["rm", id])
    }

    /// Configures for the `clear` command.
    pub fn clear(self) -> Self {
        self.args(["clear"])
    }

    /// Configures for the `latest` command.
    pub fn latest(self) -> Self {
        self.args(["latest"])
    }

    /// Configures for the `pinned` command.
    pub fn pinned(self) -> Self {
        self.args(["pinned"])
    }

    /// Configures for the `stats` command.
    pub fn stats(self) -> Self {
        self.args(["stats"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for StickyCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ===========================================
    // StickyCommand Basics
    // ===========================================

    #[test]
    fn test_command_runs_binary() {
        StickyCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = StickyCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = StickyCommand::new().args(["--help"]).output_success();
        assert!(output.contains("sticky") || output.contains("notes"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = StickyCommand::new().ls().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"ls".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
