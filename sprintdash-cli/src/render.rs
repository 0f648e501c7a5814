//! # Rendering
//!
//! Turns boards, sprints, issues and sprint metrics into terminal tables and
//! KPI cards.

use sprintdash_core::metrics::SprintMetrics;
use sprintdash_jira::{Board, JiraIssue, Sprint};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Shown wherever a value cannot be computed
pub const PLACEHOLDER: &str = "—";

const SUMMARY_WIDTH: usize = 50;

/// Direction a KPI is pointing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
  Up,
  Neutral,
  Down,
}

impl Trend {
  pub const fn symbol(self) -> &'static str {
    match self {
      Self::Up => "↑",
      Self::Neutral => "→",
      Self::Down => "↓",
    }
  }
}

/// One headline figure of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
  pub title: &'static str,
  pub value: String,
  pub subtitle: String,
  pub trend: Trend,
}

/// Format a ratio as a whole percentage, or the placeholder when undefined
pub fn format_rate(rate: Option<f64>) -> String {
  match rate {
    Some(rate) => format!("{}%", (rate * 100.0).round() as i64),
    None => PLACEHOLDER.to_string(),
  }
}

/// Format story points without trailing zeros
pub fn format_points(points: f64) -> String {
  let formatted = format!("{points:.2}");
  formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Start and end dates of a sprint, when both are known
pub fn format_sprint_dates(sprint: &Sprint) -> String {
  match (sprint.start_date, sprint.end_date) {
    (Some(start), Some(end)) => format!("{} – {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")),
    _ => PLACEHOLDER.to_string(),
  }
}

/// Label used when choosing a sprint
pub fn sprint_label(sprint: &Sprint) -> String {
  format!("{} ({})", sprint.name, sprint.state.label())
}

/// The six headline figures for a sprint
pub fn kpi_cards(metrics: &SprintMetrics) -> Vec<KpiCard> {
  let has_issues = metrics.committed_issues > 0;
  let has_points = metrics.story_points_committed > 0.0;

  vec![
    KpiCard {
      title: "Issues Committed",
      value: metrics.committed_issues.to_string(),
      subtitle: format!("{} completed", metrics.completed_issues),
      trend: Trend::Neutral,
    },
    KpiCard {
      title: "Story Points Velocity",
      value: format_points(metrics.velocity),
      subtitle: format!("{} committed", format_points(metrics.story_points_committed)),
      trend: Trend::Up,
    },
    KpiCard {
      title: "Completion Rate",
      value: format_rate(metrics.completion_rate()),
      subtitle: format!("{}/{} issues", metrics.completed_issues, metrics.committed_issues),
      trend: if has_issues && metrics.all_issues_completed() {
        Trend::Up
      } else {
        Trend::Neutral
      },
    },
    KpiCard {
      title: "Overspill Issues",
      value: metrics.overspill_issues.to_string(),
      subtitle: if metrics.all_issues_completed() {
        "Perfect sprint!".to_string()
      } else {
        "Issues not completed".to_string()
      },
      trend: if metrics.all_issues_completed() {
        Trend::Up
      } else {
        Trend::Down
      },
    },
    KpiCard {
      title: "Overspill Story Points",
      value: format_points(metrics.overspill_story_points),
      subtitle: if metrics.all_points_completed() {
        "All points delivered!".to_string()
      } else {
        "Points not delivered".to_string()
      },
      trend: if metrics.all_points_completed() {
        Trend::Up
      } else {
        Trend::Down
      },
    },
    KpiCard {
      title: "Sprint Health Score",
      value: format_rate(metrics.points_completion_rate()),
      subtitle: "Story points completion rate".to_string(),
      trend: if has_points && metrics.all_points_completed() {
        Trend::Up
      } else {
        Trend::Neutral
      },
    },
  ]
}

/// Render the KPI cards as a table
pub fn render_kpi_table(metrics: &SprintMetrics) -> String {
  #[derive(Tabled)]
  struct KpiRow {
    #[tabled(rename = "Metric")]
    title: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "")]
    trend: String,
    #[tabled(rename = "Details")]
    subtitle: String,
  }

  let rows: Vec<KpiRow> = kpi_cards(metrics)
    .into_iter()
    .map(|card| KpiRow {
      title: card.title.to_string(),
      value: card.value,
      trend: card.trend.symbol().to_string(),
      subtitle: card.subtitle,
    })
    .collect();

  Table::new(rows).with(Style::rounded()).to_string()
}

/// Render sprints as a table
pub fn render_sprint_table(sprints: &[Sprint]) -> String {
  #[derive(Tabled)]
  struct SprintRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Sprint")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Dates")]
    dates: String,
  }

  let rows: Vec<SprintRow> = sprints
    .iter()
    .map(|sprint| SprintRow {
      id: sprint.id,
      name: sprint.name.clone(),
      state: sprint.state.label().to_string(),
      dates: format_sprint_dates(sprint),
    })
    .collect();

  Table::new(rows).with(Style::sharp()).to_string()
}

/// Render boards as a table
pub fn render_board_table(boards: &[Board]) -> String {
  #[derive(Tabled)]
  struct BoardRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Board")]
    name: String,
    #[tabled(rename = "Type")]
    board_type: String,
  }

  let rows: Vec<BoardRow> = boards
    .iter()
    .map(|board| BoardRow {
      id: board.id,
      name: board.name.clone(),
      board_type: board.board_type.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
    })
    .collect();

  Table::new(rows).with(Style::sharp()).to_string()
}

/// Render a sprint's issues with their status and estimate
pub fn render_issue_table(issues: &[JiraIssue], story_points_field: &str) -> String {
  #[derive(Tabled)]
  struct IssueRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Points")]
    points: String,
    #[tabled(rename = "Done")]
    done: String,
  }

  let rows: Vec<IssueRow> = issues
    .iter()
    .map(|issue| {
      let record = issue.to_record(story_points_field);
      IssueRow {
        key: issue.key.clone(),
        summary: truncate(issue.fields.summary.as_deref().unwrap_or(""), SUMMARY_WIDTH),
        status: issue.status_name().unwrap_or(PLACEHOLDER).to_string(),
        points: record
          .story_points
          .map_or_else(|| PLACEHOLDER.to_string(), format_points),
        done: if record.status.is_done() { "✓" } else { "" }.to_string(),
      }
    })
    .collect();

  Table::new(rows).with(Style::sharp()).to_string()
}

/// Shorten `text` to at most `max` characters, ending in an ellipsis when cut
fn truncate(text: &str, max: usize) -> String {
  if text.chars().count() <= max {
    return text.to_string();
  }
  let kept: String = text.chars().take(max.saturating_sub(1)).collect();
  format!("{kept}…")
}
