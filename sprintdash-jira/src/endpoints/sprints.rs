//! # Jira Sprint Endpoints
//!
//! Sprint listing per board, sprint details, and the issues committed to a
//! sprint.

use anyhow::Result;

use crate::client::JiraClient;
use crate::models::{IssuesPage, JiraIssue, Sprint, ValuesPage};

impl JiraClient {
  /// List the sprints of a board in the order Jira returns them
  pub async fn list_board_sprints(&self, board_id: u64) -> Result<Vec<Sprint>> {
    let page: ValuesPage<Sprint> = self
      .get_agile(&format!("/board/{board_id}/sprint"), &format!("sprints for board {board_id}"))
      .await?;
    Ok(page.values)
  }

  /// Get a sprint by id
  pub async fn get_sprint(&self, sprint_id: u64) -> Result<Sprint> {
    self
      .get_agile(&format!("/sprint/{sprint_id}"), &format!("sprint {sprint_id}"))
      .await
  }

  /// Get the issues committed to a sprint
  pub async fn get_sprint_issues(&self, sprint_id: u64) -> Result<Vec<JiraIssue>> {
    let page: IssuesPage = self
      .get_agile(&format!("/sprint/{sprint_id}/issue"), &format!("issues for sprint {sprint_id}"))
      .await?;
    Ok(page.issues)
  }
}
