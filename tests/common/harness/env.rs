//! Isolated test environment with temp directory.

use super::{NotesCommand, TestNote};
use notestore::store::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary storage root.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// The storage root and the config home live side by side inside it.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("store");
        let config_home = temp_dir.path().join("config");
        Self {
            _temp_dir: temp_dir,
            root,
            config_home,
        }
    }

    /// Returns the storage root. It does not exist until the first write.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns a store over this environment's root.
    pub fn store(&self) -> NoteStore {
        NoteStore::open(&self.root)
    }

    /// Adds a test note through the store and returns its record path.
    pub fn add_note(&self, test_note: &TestNote) -> PathBuf {
        let store = self.store();
        let note = test_note.to_note();
        store.create(&note).expect("Failed to create test note");
        store.layout().note_path(note.id())
    }

    /// Writes a file relative to the storage root and returns its path.
    ///
    /// Useful for planting malformed records and stale index entries.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `config.toml` where the binary will look for it.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.join("notestore");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        self.cmd_without_root().root(&self.root)
    }

    /// Creates a NotesCommand that resolves its root from config.
    pub fn cmd_without_root(&self) -> NotesCommand {
        NotesCommand::new().config_home(&self.config_home)
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

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.write_file("marker.txt", "x");
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--root");
        assert_eq!(args[1], env.root().to_string_lossy());
    }

    #[test]
    fn test_env_add_note_creates_record() {
        let env = TestEnv::new();
        let path = env.add_note(&TestNote::new("Test Note").tag("integration"));

        assert!(path.is_file());
        assert!(path.extension().is_some_and(|ext| ext == "txt"));
        assert!(env.root().join("tags").join("integration.txt").is_file());
        assert!(env.root().join("authors").join("Author_1.txt").is_file());
    }
}
