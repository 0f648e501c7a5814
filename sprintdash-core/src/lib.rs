//! # Sprintdash Core Library
//!
//! Core library for sprintdash providing configuration directories and
//! settings, the persisted Jira credential store, the connection session, and
//! the pure sprint metric deriver shared by the Jira client and the CLI.

pub mod config;
pub mod creds;
pub mod metrics;
pub mod output;
pub mod prompts;
pub mod session;
pub mod url;

// Re-export main types for the client and CLI crates
pub use config::{ConfigDirs, Settings, get_config_dirs};
pub use creds::{CredentialStore, Credentials, CredentialsError};
pub use metrics::{IssueRecord, IssueStatus, SprintMetrics, derive_metrics};
pub use output::{ColorMode, print_error, print_header, print_info, print_success, print_warning};
pub use session::Session;
