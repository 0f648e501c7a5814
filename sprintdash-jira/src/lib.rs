//! # Jira Agile API Client
//!
//! Provides Jira Agile REST API integration for boards, sprints and sprint
//! issues, and builds sprint reports from them for the sprintdash dashboard.

mod client;
mod consts;
mod endpoints;
pub mod models;
mod report;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{
  Board, JiraAuth, JiraIssue, JiraIssueFields, JiraIssueStatus, JiraStatusCategory, Sprint, SprintState,
};
pub use report::SprintReport;
