use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use sprintdash_core::creds::Credentials;
use sprintdash_core::metrics::{IssueRecord, IssueStatus};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

impl From<&Credentials> for JiraAuth {
  fn from(credentials: &Credentials) -> Self {
    Self {
      username: credentials.account_id.clone(),
      api_token: credentials.token.clone(),
    }
  }
}

/// Represents a Jira Agile board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
  pub id: u64,
  pub name: String,
  #[serde(rename = "type")]
  pub board_type: Option<String>,
}

/// Lifecycle state of a sprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintState {
  Active,
  Closed,
  Future,
  Unknown,
}

impl SprintState {
  /// Classify a raw state string, ignoring case
  pub fn parse(raw: &str) -> Self {
    match raw.to_lowercase().as_str() {
      "active" => Self::Active,
      "closed" => Self::Closed,
      "future" => Self::Future,
      _ => Self::Unknown,
    }
  }

  /// Label shown to users
  pub const fn label(self) -> &'static str {
    match self {
      Self::Active => "Active",
      Self::Closed => "Completed",
      Self::Future => "Future",
      Self::Unknown => "Unknown",
    }
  }
}

impl<'de> Deserialize<'de> for SprintState {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    Ok(Self::parse(&raw))
  }
}

impl fmt::Display for SprintState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Represents a Jira sprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
  pub id: u64,
  pub name: String,
  pub state: SprintState,
  pub start_date: Option<DateTime<Utc>>,
  pub end_date: Option<DateTime<Utc>>,
}

/// Represents a Jira issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraIssue {
  pub id: String,
  pub key: String,
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields.
///
/// Custom fields such as the story point estimate vary per site, so every
/// field not modelled here is kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraIssueFields {
  pub summary: Option<String>,
  pub status: Option<JiraIssueStatus>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Represents a Jira issue status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraIssueStatus {
  pub name: String,
  #[serde(rename = "statusCategory")]
  pub status_category: Option<JiraStatusCategory>,
}

/// Represents the category a status belongs to (`new`, `indeterminate`,
/// `done`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraStatusCategory {
  pub key: String,
  pub name: Option<String>,
}

impl JiraIssue {
  /// Key of the status category, if the status carries one
  pub fn status_category_key(&self) -> Option<&str> {
    self
      .fields
      .status
      .as_ref()
      .and_then(|status| status.status_category.as_ref())
      .map(|category| category.key.as_str())
  }

  /// Name of the current status
  pub fn status_name(&self) -> Option<&str> {
    self.fields.status.as_ref().map(|status| status.name.as_str())
  }

  /// Story point estimate held in `field`, if it is numeric
  pub fn story_points(&self, field: &str) -> Option<f64> {
    self.fields.extra.get(field).and_then(Value::as_f64)
  }

  /// Reduce the issue to the facets sprint metrics depend on
  pub fn to_record(&self, story_points_field: &str) -> IssueRecord {
    IssueRecord::new(
      IssueStatus::from_category_key(self.status_category_key()),
      self.story_points(story_points_field),
    )
  }
}

/// Page of `values` returned by board and sprint listings
#[derive(Debug, Deserialize)]
pub(crate) struct ValuesPage<T> {
  #[serde(default = "Vec::new")]
  pub values: Vec<T>,
}

/// Issues returned for a sprint
#[derive(Debug, Deserialize)]
pub(crate) struct IssuesPage {
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_jira_auth_from_credentials() {
    let credentials = Credentials::new("acme.atlassian.net", "dev@acme.io", "token").unwrap();
    let auth = JiraAuth::from(&credentials);

    assert_eq!(auth.username, "dev@acme.io");
    assert_eq!(auth.api_token, "token");
  }

  #[test]
  fn test_sprint_deserialization_lowercases_state() {
    let json = json!({
        "id": 37,
        "self": "https://acme.atlassian.net/rest/agile/1.0/sprint/37",
        "state": "ACTIVE",
        "name": "Sprint 12",
        "startDate": "2024-03-04T09:00:00.000+01:00",
        "endDate": "2024-03-18T09:00:00.000+01:00",
        "originBoardId": 5
    });

    let sprint: Sprint = serde_json::from_value(json).unwrap();

    assert_eq!(sprint.id, 37);
    assert_eq!(sprint.name, "Sprint 12");
    assert_eq!(sprint.state, SprintState::Active);
    assert_eq!(sprint.start_date.unwrap().to_rfc3339(), "2024-03-04T08:00:00+00:00");
    assert!(sprint.end_date.is_some());
  }

  #[test]
  fn test_future_sprint_without_dates() {
    let json = json!({ "id": 40, "name": "Sprint 15", "state": "future" });

    let sprint: Sprint = serde_json::from_value(json).unwrap();

    assert_eq!(sprint.state, SprintState::Future);
    assert!(sprint.start_date.is_none());
    assert!(sprint.end_date.is_none());
  }

  #[test]
  fn test_sprint_state_parsing() {
    assert_eq!(SprintState::parse("Closed"), SprintState::Closed);
    assert_eq!(SprintState::parse("future"), SprintState::Future);
    assert_eq!(SprintState::parse("archived"), SprintState::Unknown);
    assert_eq!(SprintState::Closed.to_string(), "Completed");
  }

  #[test]
  fn test_sprint_state_serializes_lowercase() {
    assert_eq!(serde_json::to_value(SprintState::Active).unwrap(), json!("active"));
  }

  #[test]
  fn test_issue_story_points_and_status() {
    let json = json!({
        "id": "10001",
        "key": "ACME-1",
        "fields": {
            "summary": "Ship the thing",
            "status": {
                "name": "Done",
                "statusCategory": { "id": 3, "key": "done", "name": "Done" }
            },
            "customfield_10016": 5.0,
            "customfield_10026": "not a number"
        }
    });

    let issue: JiraIssue = serde_json::from_value(json).unwrap();

    assert_eq!(issue.status_category_key(), Some("done"));
    assert_eq!(issue.status_name(), Some("Done"));
    assert_eq!(issue.story_points("customfield_10016"), Some(5.0));
    assert_eq!(issue.story_points("customfield_10026"), None);
    assert_eq!(issue.story_points("customfield_99999"), None);

    let record = issue.to_record("customfield_10016");
    assert_eq!(record.status, IssueStatus::Done);
    assert_eq!(record.story_points, Some(5.0));
  }

  #[test]
  fn test_issue_with_null_points_and_no_category() {
    let json = json!({
        "id": "10002",
        "key": "ACME-2",
        "fields": {
            "status": { "name": "Triage" },
            "customfield_10016": null
        }
    });

    let issue: JiraIssue = serde_json::from_value(json).unwrap();
    let record = issue.to_record("customfield_10016");

    assert_eq!(record.status, IssueStatus::NotDone);
    assert_eq!(record.story_points, None);
    assert!(issue.fields.summary.is_none());
  }

  #[test]
  fn test_pages_default_to_empty() {
    let boards: ValuesPage<Board> = serde_json::from_value(json!({ "maxResults": 50 })).unwrap();
    assert!(boards.values.is_empty());

    let issues: IssuesPage = serde_json::from_value(json!({ "total": 0 })).unwrap();
    assert!(issues.issues.is_empty());
  }
}
