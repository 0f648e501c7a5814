//! # Credential Storage
//!
//! Persists the Jira connection credentials (domain, account and API token) as
//! a single record in a local key/value storage file. The record is stored as
//! a JSON-encoded string under a fixed key so the file can hold other entries
//! alongside it.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ConfigDirs;

/// Storage key under which the credential record is persisted
pub const STORAGE_KEY: &str = "jiraConfig";

/// Errors raised when a credential record is incomplete or unreadable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
  #[error("{0} cannot be empty")]
  EmptyField(&'static str),
  #[error("Stored credentials could not be decoded: {0}")]
  Undecodable(String),
}

/// Jira connection credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
  /// Jira site, e.g. `mycompany.atlassian.net`
  pub domain: String,
  /// Account identifier, usually the Atlassian account email
  pub account_id: String,
  /// API token paired with the account
  pub token: String,
}

impl Credentials {
  /// Build a credential record, trimming whitespace and rejecting empty fields
  pub fn new(domain: &str, account_id: &str, token: &str) -> Result<Self, CredentialsError> {
    let credentials = Self {
      domain: domain.trim().to_string(),
      account_id: account_id.trim().to_string(),
      token: token.trim().to_string(),
    };
    credentials.validate()?;
    Ok(credentials)
  }

  /// Ensure every field is non-empty
  pub fn validate(&self) -> Result<(), CredentialsError> {
    if self.domain.trim().is_empty() {
      return Err(CredentialsError::EmptyField("Domain"));
    }
    if self.account_id.trim().is_empty() {
      return Err(CredentialsError::EmptyField("Account"));
    }
    if self.token.trim().is_empty() {
      return Err(CredentialsError::EmptyField("API token"));
    }
    Ok(())
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("domain", &self.domain)
      .field("account_id", &self.account_id)
      .field("token", &"<redacted>")
      .finish()
  }
}

/// File-backed store for the single credential record
#[derive(Debug, Clone)]
pub struct CredentialStore {
  path: PathBuf,
}

impl CredentialStore {
  /// Create a store backed by the storage file at `path`
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Create a store using the storage file in the application data directory
  pub fn from_config_dirs(config_dirs: &ConfigDirs) -> Self {
    Self::new(config_dirs.storage_path())
  }

  /// Path of the backing storage file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Load the persisted credential record, if any.
  ///
  /// A record that is present but cannot be decoded fails with
  /// [`CredentialsError::Undecodable`]; an unreadable storage file fails with
  /// a plain I/O or parse error.
  pub fn load(&self) -> Result<Option<Credentials>> {
    let entries = self.read_entries()?;
    let Some(encoded) = entries.get(STORAGE_KEY) else {
      return Ok(None);
    };

    let credentials: Credentials =
      serde_json::from_str(encoded).map_err(|e| CredentialsError::Undecodable(e.to_string()))?;

    Ok(Some(credentials))
  }

  /// Persist a credential record, replacing any previous one
  pub fn save(&self, credentials: &Credentials) -> Result<()> {
    let mut entries = self.read_entries()?;
    let encoded = serde_json::to_string(credentials).context("Failed to encode credentials")?;
    entries.insert(STORAGE_KEY.to_string(), encoded);
    self.write_entries(&entries)?;

    debug!(path = %self.path.display(), "Stored Jira credentials");
    Ok(())
  }

  /// Remove the persisted credential record, leaving other entries intact
  pub fn clear(&self) -> Result<()> {
    if !self.path.exists() {
      return Ok(());
    }

    let mut entries = self.read_entries()?;
    if entries.remove(STORAGE_KEY).is_some() {
      self.write_entries(&entries)?;
      debug!(path = %self.path.display(), "Cleared Jira credentials");
    }

    Ok(())
  }

  fn read_entries(&self) -> Result<BTreeMap<String, String>> {
    if !self.path.exists() {
      return Ok(BTreeMap::new());
    }

    let content = fs::read_to_string(&self.path)
      .with_context(|| format!("Failed to read storage file {}", self.path.display()))?;
    if content.trim().is_empty() {
      return Ok(BTreeMap::new());
    }

    serde_json::from_str(&content).with_context(|| format!("Failed to parse storage file {}", self.path.display()))
  }

  fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(entries).context("Failed to serialize storage")?;
    fs::write(&self.path, content).with_context(|| format!("Failed to write storage file {}", self.path.display()))?;

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;

      let mut perms = fs::metadata(&self.path)?.permissions();
      perms.set_mode(0o600);
      fs::set_permissions(&self.path, perms)
        .with_context(|| format!("Failed to set permissions on {}", self.path.display()))?;
    }

    Ok(())
  }
}
