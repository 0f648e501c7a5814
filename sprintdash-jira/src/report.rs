//! # Sprint Reports
//!
//! Combines the board, sprint and issue endpoints into the two operations the
//! dashboard performs: listing a board's sprints and reducing a sprint's
//! issues into metrics.

use anyhow::{Context, Result};
use serde::Serialize;
use sprintdash_core::metrics::{IssueRecord, SprintMetrics, derive_metrics};
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{JiraIssue, Sprint};

/// A sprint together with its issues and the metrics derived from them
#[derive(Debug, Clone, Serialize)]
pub struct SprintReport {
  pub sprint: Sprint,
  pub metrics: SprintMetrics,
  pub issues: Vec<JiraIssue>,
}

impl JiraClient {
  /// List the sprints of `board_id`, or of the first visible board when no
  /// board is given
  pub async fn sprints_for_board(&self, board_id: Option<u64>) -> Result<Vec<Sprint>> {
    let board_id = match board_id {
      Some(id) => id,
      None => {
        let board = self
          .first_board()
          .await?
          .ok_or_else(|| anyhow::anyhow!("No boards available"))?;
        debug!(board_id = board.id, board = %board.name, "Using first available board");
        board.id
      }
    };

    self.list_board_sprints(board_id).await
  }

  /// Fetch a sprint and its issues and derive the sprint metrics.
  ///
  /// Story points are read from `story_points_field` on each issue.
  pub async fn sprint_report(&self, sprint_id: u64, story_points_field: &str) -> Result<SprintReport> {
    let sprint = self.get_sprint(sprint_id).await?;
    let issues = self
      .get_sprint_issues(sprint_id)
      .await
      .with_context(|| format!("Failed to load issues for sprint '{}'", sprint.name))?;

    let records: Vec<IssueRecord> = issues.iter().map(|issue| issue.to_record(story_points_field)).collect();
    let metrics = derive_metrics(&records);
    debug!(sprint_id, issues = issues.len(), velocity = metrics.velocity, "Derived sprint metrics");

    Ok(SprintReport { sprint, metrics, issues })
  }
}
