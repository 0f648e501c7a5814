//! # Sprint Metrics
//!
//! Reduces the issues committed to a sprint into the counters shown on the
//! dashboard. The reduction is a pure sum/count, so the result does not depend
//! on issue order.

use serde::{Deserialize, Serialize};

/// Whether an issue's status falls in the "done" category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
  Done,
  NotDone,
}

impl IssueStatus {
  /// Classify a Jira status category key
  pub fn from_category_key(key: Option<&str>) -> Self {
    match key {
      Some("done") => Self::Done,
      _ => Self::NotDone,
    }
  }

  pub const fn is_done(self) -> bool {
    matches!(self, Self::Done)
  }
}

/// The two facets of an issue the metrics depend on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IssueRecord {
  pub status: IssueStatus,
  /// Story point estimate; absent counts as zero
  pub story_points: Option<f64>,
}

impl IssueRecord {
  pub const fn new(status: IssueStatus, story_points: Option<f64>) -> Self {
    Self { status, story_points }
  }

  fn points(&self) -> f64 {
    self.story_points.unwrap_or(0.0)
  }
}

/// Aggregate counters for one sprint
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintMetrics {
  pub committed_issues: usize,
  pub completed_issues: usize,
  pub story_points_committed: f64,
  pub story_points_completed: f64,
  pub overspill_issues: usize,
  pub overspill_story_points: f64,
  pub velocity: f64,
}

impl SprintMetrics {
  /// Share of committed issues that were completed, `None` for an empty sprint
  pub fn completion_rate(&self) -> Option<f64> {
    ratio(self.completed_issues as f64, self.committed_issues as f64)
  }

  /// Share of committed story points that were completed, `None` when nothing
  /// was estimated
  pub fn points_completion_rate(&self) -> Option<f64> {
    ratio(self.story_points_completed, self.story_points_committed)
  }

  /// Every committed issue was completed
  pub fn all_issues_completed(&self) -> bool {
    self.overspill_issues == 0
  }

  /// Every committed story point was delivered
  pub fn all_points_completed(&self) -> bool {
    self.overspill_story_points == 0.0
  }
}

fn ratio(part: f64, whole: f64) -> Option<f64> {
  if whole == 0.0 { None } else { Some(part / whole) }
}

/// Derive sprint metrics from the sprint's issues
pub fn derive_metrics<'a, I>(issues: I) -> SprintMetrics
where
  I: IntoIterator<Item = &'a IssueRecord>,
{
  let mut metrics = SprintMetrics::default();

  for issue in issues {
    metrics.committed_issues += 1;
    metrics.story_points_committed += issue.points();

    if issue.status.is_done() {
      metrics.completed_issues += 1;
      metrics.story_points_completed += issue.points();
    }
  }

  metrics.overspill_issues = metrics.committed_issues - metrics.completed_issues;
  metrics.overspill_story_points = metrics.story_points_committed - metrics.story_points_completed;
  metrics.velocity = metrics.story_points_completed;
  metrics
}
