//! Temporary application directories for testing
//!
//! This module provides a per-test directory tree laid out the way sprintdash
//! lays out its XDG directories, without touching the process environment.
//! Child processes can be pointed at it through [`TestDirsGuard::xdg_vars`].

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Application directory name used under each XDG base directory
pub const APP_DIR: &str = "sprintdash";

/// A temporary directory tree with `config/` and `data/` bases
pub struct TestDirsGuard {
  /// The temporary directory holding all bases
  pub temp_dir: TempDir,
}

impl Default for TestDirsGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl TestDirsGuard {
  /// Create the directory tree
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    for base in ["config", "data"] {
      fs::create_dir_all(temp_dir.path().join(base)).expect("Failed to create XDG base directory");
    }
    Self { temp_dir }
  }

  /// XDG config base directory
  pub fn config_home(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// XDG data base directory
  pub fn data_home(&self) -> PathBuf {
    self.temp_dir.path().join("data")
  }

  /// Application config directory
  pub fn config_dir(&self) -> PathBuf {
    self.config_home().join(APP_DIR)
  }

  /// Application data directory
  pub fn data_dir(&self) -> PathBuf {
    self.data_home().join(APP_DIR)
  }

  /// Path of the key/value storage file
  pub fn storage_path(&self) -> PathBuf {
    self.data_dir().join("storage.json")
  }

  /// Path of the settings file
  pub fn settings_path(&self) -> PathBuf {
    self.config_dir().join("sprintdash.toml")
  }

  /// Write raw content to the storage file
  pub fn write_storage(&self, content: &str) {
    fs::create_dir_all(self.data_dir()).expect("Failed to create data directory");
    fs::write(self.storage_path(), content).expect("Failed to write storage file");
  }

  /// Read the storage file, if it exists
  pub fn read_storage(&self) -> Option<String> {
    fs::read_to_string(self.storage_path()).ok()
  }

  /// Write raw content to the settings file
  pub fn write_settings(&self, content: &str) {
    fs::create_dir_all(self.config_dir()).expect("Failed to create config directory");
    fs::write(self.settings_path(), content).expect("Failed to write settings file");
  }

  /// Environment variables pointing a child process at this tree
  pub fn xdg_vars(&self) -> [(&'static str, PathBuf); 2] {
    [
      ("XDG_CONFIG_HOME", self.config_home()),
      ("XDG_DATA_HOME", self.data_home()),
    ]
  }
}
