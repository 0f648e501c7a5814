//! # Configuration Management
//!
//! Handles application configuration, directory management, and persistent
//! settings for sprintdash, including XDG base directory support.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Custom field Jira Cloud uses for story point estimates by default
pub const DEFAULT_STORY_POINTS_FIELD: &str = "customfield_10016";

/// Represents the configuration directories for the sprintdash application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "sprintdash").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
      data_dir: proj_dirs.data_dir().to_path_buf(),
    })
  }

  /// Get the path to the key/value storage file holding persisted credentials
  pub fn storage_path(&self) -> PathBuf {
    self.data_dir.join("storage.json")
  }

  /// Get the path to the settings file
  pub fn settings_path(&self) -> PathBuf {
    self.config_dir.join("sprintdash.toml")
  }

  /// Load settings from file or return default
  pub fn load_settings(&self) -> Result<Settings> {
    let settings_path = self.settings_path();

    if !settings_path.exists() {
      return Ok(Settings::default());
    }

    let content = fs::read_to_string(&settings_path)
      .with_context(|| format!("Failed to read settings from {}", settings_path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse settings from {}", settings_path.display()))
  }

  /// Save settings to file
  pub fn save_settings(&self, settings: &Settings) -> Result<()> {
    let settings_path = self.settings_path();

    if let Some(parent) = settings_path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(settings).context("Failed to serialize settings to TOML")?;

    fs::write(&settings_path, content)
      .with_context(|| format!("Failed to write settings to {}", settings_path.display()))?;

    Ok(())
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// Persistent user settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Issue field holding the story point estimate
  pub story_points_field: String,
  /// Board used when no board is given on the command line
  pub board_id: Option<u64>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      story_points_field: DEFAULT_STORY_POINTS_FIELD.to_string(),
      board_id: None,
    }
  }
}
