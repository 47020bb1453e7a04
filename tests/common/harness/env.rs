//! Isolated test environment with temp directories.

#![allow(dead_code)]

use super::{StickyCommand, TestNote};
use sticky::domain::Note;
use sticky::store::{JsonNoteStore, LEGACY_FILE_NAME, NoteRepository, STORE_FILE_NAME};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Notes live under `data/`; a private config home lives under `config/`.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    data_dir: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The data directory itself is not created; the CLI creates it on
    /// first use.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config home");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path to the JSON note store.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    /// Returns the path to the line-per-note legacy file.
    pub fn legacy_path(&self) -> PathBuf {
        self.data_dir.join(LEGACY_FILE_NAME)
    }

    fn store(&self) -> JsonNoteStore {
        JsonNoteStore::open(&self.data_dir)
    }

    /// Appends notes to the store and returns them as stored.
    pub fn seed(&self, notes: &[TestNote]) -> Vec<Note> {
        let store = self.store();
        let mut stored = store.load().expect("Failed to load store");
        let added: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        stored.extend(added.iter().cloned());
        store.save(&stored).expect("Failed to save store");
        added
    }

    /// Reads every note currently in the store.
    pub fn stored_notes(&self) -> Vec<Note> {
        self.store().load().expect("Failed to load store")
    }

    /// Writes a file into the data directory and returns its path.
    pub fn write_data_file(&self, name: &str, content: &str) -> PathBuf {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        let path = self.data_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `sticky/config.toml` under the private config home.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.join("sticky");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a StickyCommand configured for this test environment.
    pub fn cmd(&self) -> StickyCommand {
        self.cmd_without_dir().dir(&self.data_dir)
    }

    /// Creates a StickyCommand that relies on config for the data directory.
    pub fn cmd_without_dir(&self) -> StickyCommand {
        StickyCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_store_path() {
        let env = TestEnv::new();
        assert!(env.store_path().ends_with("notes.json"));
        assert!(env.store_path().starts_with(env.data_dir()));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }

    // ===========================================
    // Seeding
    // ===========================================

    #[test]
    fn test_env_seed_creates_store() {
        let env = TestEnv::new();
        env.seed(&[TestNote::new("Seeded")]);

        assert!(env.store_path().is_file());
        let stored = env.stored_notes();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].message(), "Seeded");
    }

    #[test]
    fn test_env_seed_appends() {
        let env = TestEnv::new();
        env.seed(&[TestNote::new("First")]);
        env.seed(&[TestNote::new("Second"), TestNote::new("Third")]);

        let messages: Vec<_> = env
            .stored_notes()
            .iter()
            .map(|n| n.message().to_string())
            .collect();
        assert_eq!(messages, vec!["First", "Second", "Third"]);
    }
}
