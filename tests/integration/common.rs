//! Shared environment for binary-level tests.

use assert_cmd::Command;
use cursorflow::test_utils::TemplateStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A template store plus an isolated home directory.
pub struct TestEnv {
    pub store: TemplateStore,
    home: TempDir,
}

impl TestEnv {
    /// Every prompt type has a template.
    pub fn new() -> Self {
        Self::from_store(TemplateStore::with_all_templates().unwrap())
    }

    pub fn from_store(store: TemplateStore) -> Self {
        Self {
            store,
            home: TempDir::new().unwrap(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        self.store.base_dir()
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.home().join(".cursorflow/config.toml")
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// `cursorflow` running in the base directory with HOME pointed at the temp home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cursorflow").unwrap();
        cmd.current_dir(self.base_dir())
            .env("HOME", self.home())
            .env("CURSORFLOW_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
