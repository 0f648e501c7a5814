//! # Sprint Dashboard
//!
//! Ties the connection session, user settings and the Jira client together.
//! Remote failures never escape as errors: they are logged, surfaced through
//! the notifier, and turned into empty results.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use sprintdash_core::config::{ConfigDirs, Settings};
use sprintdash_core::creds::{CredentialStore, Credentials};
use sprintdash_core::metrics::SprintMetrics;
use sprintdash_core::session::Session;
use sprintdash_jira::{Board, JiraClient, Sprint, SprintReport, create_jira_client};
use tracing::{debug, warn};

use crate::notify::{Notification, Notifier};

const ERROR_TITLE: &str = "Error";
const SPRINTS_FAILURE: &str = "Failed to fetch sprints from Jira";
const SPRINT_DATA_FAILURE: &str = "Failed to fetch sprint data from Jira";
const BOARDS_FAILURE: &str = "Failed to fetch boards from Jira";
const CONNECTION_FAILURE: &str = "Failed to reach Jira";

/// Shared view of whether a remote operation is in flight.
///
/// Clones observe the same flag, so a handle taken before an operation starts
/// can be read while that operation is awaited.
#[derive(Debug, Clone, Default)]
pub struct LoadingState(Arc<AtomicBool>);

impl LoadingState {
  pub fn is_loading(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }

  fn begin(&self) -> LoadingGuard<'_> {
    self.0.store(true, Ordering::Release);
    LoadingGuard(&self.0)
  }
}

/// Clears the loading flag when the operation finishes or is dropped
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
  fn drop(&mut self) {
    self.0.store(false, Ordering::Release);
  }
}

/// Connection state, settings and remote operations for one user
pub struct SprintDashboard<N: Notifier> {
  session: Session,
  settings: Settings,
  notifier: N,
  loading: LoadingState,
}

impl<N: Notifier> SprintDashboard<N> {
  pub fn new(session: Session, settings: Settings, notifier: N) -> Self {
    Self {
      session,
      settings,
      notifier,
      loading: LoadingState::default(),
    }
  }

  /// Load the session and settings persisted under `config_dirs`
  pub fn open(config_dirs: &ConfigDirs, notifier: N) -> Result<Self> {
    let session = Session::init(CredentialStore::from_config_dirs(config_dirs))?;
    let settings = config_dirs.load_settings()?;
    Ok(Self::new(session, settings, notifier))
  }

  pub fn session(&self) -> &Session {
    &self.session
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  pub fn notifier(&self) -> &N {
    &self.notifier
  }

  pub fn is_connected(&self) -> bool {
    self.session.is_connected()
  }

  /// Whether a remote operation is in flight
  pub fn is_loading(&self) -> bool {
    self.loading.is_loading()
  }

  /// A handle on the loading flag that stays readable while an operation
  /// holds the dashboard
  pub fn loading_state(&self) -> LoadingState {
    self.loading.clone()
  }

  /// Store new credentials and announce the connection
  pub fn connect(&mut self, credentials: Credentials) -> Result<()> {
    self.session.connect(credentials)?;
    self
      .notifier
      .notify(Notification::success("Connected", "Successfully connected to Jira"));
    Ok(())
  }

  /// Forget the stored credentials
  pub fn disconnect(&mut self) -> Result<()> {
    self.session.disconnect()
  }

  /// All boards visible to the connected account
  pub async fn list_boards(&mut self) -> Vec<Board> {
    self
      .fetch(BOARDS_FAILURE, |client| async move { client.list_boards().await })
      .await
      .unwrap_or_default()
  }

  /// Sprints of `board_id`, falling back to the configured board and then to
  /// the first visible board
  pub async fn list_sprints(&mut self, board_id: Option<u64>) -> Vec<Sprint> {
    let board_id = board_id.or(self.settings.board_id);
    self
      .fetch(SPRINTS_FAILURE, |client| async move {
        client.sprints_for_board(board_id).await
      })
      .await
      .unwrap_or_default()
  }

  /// The sprint, its issues and the derived metrics
  pub async fn sprint_report(&mut self, sprint_id: u64) -> Option<SprintReport> {
    let field = self.settings.story_points_field.clone();
    self
      .fetch(SPRINT_DATA_FAILURE, |client| async move {
        client.sprint_report(sprint_id, &field).await
      })
      .await
  }

  /// Metrics for one sprint
  pub async fn sprint_metrics(&mut self, sprint_id: u64) -> Option<SprintMetrics> {
    self.sprint_report(sprint_id).await.map(|report| report.metrics)
  }

  /// Whether Jira accepts the stored credentials
  pub async fn check_connection(&mut self) -> Option<bool> {
    self
      .fetch(CONNECTION_FAILURE, |client| async move { client.test_connection().await })
      .await
  }

  /// Run `op` against a client built from the active credentials.
  ///
  /// Returns `None` without any request when disconnected, and `None` after a
  /// notification when the operation fails.
  async fn fetch<T, F, Fut>(&mut self, failure: &str, op: F) -> Option<T>
  where
    F: FnOnce(JiraClient) -> Fut,
    Fut: Future<Output = Result<T>>,
  {
    let Some(credentials) = self.session.credentials() else {
      debug!("Not connected, skipping Jira request");
      return None;
    };

    let client = match create_jira_client(&credentials.domain, &credentials.account_id, &credentials.token) {
      Ok(client) => client,
      Err(e) => {
        self.report_failure(failure, &e);
        return None;
      }
    };

    let result = {
      let _loading = self.loading.begin();
      op(client).await
    };

    match result {
      Ok(value) => Some(value),
      Err(e) => {
        self.report_failure(failure, &e);
        None
      }
    }
  }

  fn report_failure(&self, failure: &str, error: &anyhow::Error) {
    warn!("{failure}: {error:#}");
    self.notifier.notify(Notification::error(ERROR_TITLE, failure));
  }
}
