//! # Connection Session
//!
//! Explicit connection state: the credentials currently in use and the store
//! they are persisted to. A session is initialised from whatever the store
//! holds, and `connect`/`disconnect` keep memory and storage in step.

use anyhow::Result;
use tracing::{info, warn};

use crate::creds::{CredentialStore, Credentials, CredentialsError};

/// The active Jira connection, if any
#[derive(Debug)]
pub struct Session {
  store: CredentialStore,
  credentials: Option<Credentials>,
}

impl Session {
  /// Load the persisted credentials from `store`.
  ///
  /// A stored record that cannot be decoded or has empty fields is ignored,
  /// so no request is ever built from it and `disconnect` can still clear it.
  /// Only an unreadable storage file is an error.
  pub fn init(store: CredentialStore) -> Result<Self> {
    let credentials = match store.load() {
      Ok(Some(credentials)) => match credentials.validate() {
        Ok(()) => Some(credentials),
        Err(e) => {
          warn!("Ignoring stored credentials: {e}");
          None
        }
      },
      Ok(None) => None,
      Err(e) => match e.downcast_ref::<CredentialsError>() {
        Some(reason) => {
          warn!(path = %store.path().display(), "Ignoring stored credentials: {reason}");
          None
        }
        None => return Err(e.context("Failed to load stored credentials")),
      },
    };

    Ok(Self { store, credentials })
  }

  /// Validate and persist new credentials, replacing any existing ones
  pub fn connect(&mut self, credentials: Credentials) -> Result<()> {
    credentials.validate()?;
    self.store.save(&credentials)?;
    info!(domain = %credentials.domain, "Connected to Jira");
    self.credentials = Some(credentials);
    Ok(())
  }

  /// Forget the current credentials and remove them from storage
  pub fn disconnect(&mut self) -> Result<()> {
    self.store.clear()?;
    self.credentials = None;
    info!("Disconnected from Jira");
    Ok(())
  }

  /// The active credentials
  pub fn credentials(&self) -> Option<&Credentials> {
    self.credentials.as_ref()
  }

  /// Whether credentials are available
  pub fn is_connected(&self) -> bool {
    self.credentials.is_some()
  }

  /// The backing credential store
  pub fn store(&self) -> &CredentialStore {
    &self.store
  }
}

#[cfg(test)]
mod tests {
  use sprintdash_test_utils::TestDirsGuard;

  use super::*;
  use crate::creds::STORAGE_KEY;

  fn credentials() -> Credentials {
    Credentials::new("acme.atlassian.net", "dev@acme.io", "token").unwrap()
  }

  #[test]
  fn test_init_without_stored_credentials() {
    let dirs = TestDirsGuard::new();
    let session = Session::init(CredentialStore::new(dirs.storage_path())).unwrap();

    assert!(!session.is_connected());
    assert!(session.credentials().is_none());
  }

  #[test]
  fn test_connect_persists_for_next_session() {
    let dirs = TestDirsGuard::new();
    let mut session = Session::init(CredentialStore::new(dirs.storage_path())).unwrap();

    session.connect(credentials()).unwrap();
    assert!(session.is_connected());

    let reloaded = Session::init(CredentialStore::new(dirs.storage_path())).unwrap();
    assert_eq!(reloaded.credentials(), Some(&credentials()));
  }

  #[test]
  fn test_disconnect_clears_storage() {
    let dirs = TestDirsGuard::new();
    let mut session = Session::init(CredentialStore::new(dirs.storage_path())).unwrap();
    session.connect(credentials()).unwrap();

    session.disconnect().unwrap();
    assert!(!session.is_connected());

    let reloaded = Session::init(CredentialStore::new(dirs.storage_path())).unwrap();
    assert!(!reloaded.is_connected());
  }

  #[test]
  fn test_connect_rejects_incomplete_credentials() {
    let dirs = TestDirsGuard::new();
    let mut session = Session::init(CredentialStore::new(dirs.storage_path())).unwrap();

    let incomplete = Credentials {
      domain: "acme.atlassian.net".to_string(),
      account_id: String::new(),
      token: "token".to_string(),
    };

    assert!(session.connect(incomplete).is_err());
    assert!(!session.is_connected());
    assert!(dirs.read_storage().is_none());
  }

  #[test]
  fn test_init_ignores_incomplete_stored_record() {
    let dirs = TestDirsGuard::new();
    let record = r#"{"domain":"acme.atlassian.net","accountId":"","token":"token"}"#;
    dirs.write_storage(&serde_json::json!({ STORAGE_KEY: record }).to_string());

    let session = Session::init(CredentialStore::new(dirs.storage_path())).unwrap();
    assert!(!session.is_connected());
  }

  #[test]
  fn test_init_ignores_undecodable_record_and_disconnect_clears_it() {
    let dirs = TestDirsGuard::new();
    let record = r#"{"domain":"acme.atlassian.net","accountId":"dev@acme.io"}"#;
    dirs.write_storage(&serde_json::json!({ STORAGE_KEY: record }).to_string());

    let mut session = Session::init(CredentialStore::new(dirs.storage_path())).unwrap();
    assert!(!session.is_connected());

    session.disconnect().unwrap();
    assert!(!dirs.read_storage().unwrap().contains(STORAGE_KEY));
  }

  #[test]
  fn test_init_fails_on_unparsable_storage_file() {
    let dirs = TestDirsGuard::new();
    dirs.write_storage("not json");

    let error = Session::init(CredentialStore::new(dirs.storage_path())).unwrap_err();
    assert!(format!("{error:#}").contains("Failed to load stored credentials"));
  }
}
