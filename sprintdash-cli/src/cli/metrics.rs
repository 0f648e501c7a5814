//! # Metrics Command
//!
//! Shows the KPI cards of a sprint, optionally with the sprint's issues.

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Select;
use serde::Serialize;
use sprintdash_core::metrics::SprintMetrics;
use sprintdash_core::output::{format_muted, print_header, print_info};
use sprintdash_core::prompts::sprintdash_theme;
use sprintdash_jira::{Sprint, SprintState};

use super::sprints::print_not_connected;
use super::{OutputFormat, create_runtime, open_dashboard, with_spinner};
use crate::render::{format_sprint_dates, render_issue_table, render_kpi_table, sprint_label};

/// Arguments for the metrics command
#[derive(Args)]
pub struct MetricsArgs {
  /// Sprint to report on; asked for when omitted
  #[arg(index = 1)]
  pub sprint_id: Option<u64>,

  /// Board to pick the sprint from
  #[arg(long, short = 'b')]
  pub board: Option<u64>,

  /// Also list the sprint's issues
  #[arg(long, short = 'i')]
  pub issues: bool,

  /// Output format
  #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,
}

/// Metrics as printed with `--format json`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsOutput<'a> {
  sprint: &'a Sprint,
  metrics: &'a SprintMetrics,
  completion_rate: Option<f64>,
  points_completion_rate: Option<f64>,
}

/// Handle the metrics command
pub(crate) fn handle_metrics_command(args: MetricsArgs) -> Result<()> {
  let mut dashboard = open_dashboard()?;
  if !dashboard.is_connected() {
    print_not_connected();
    return Ok(());
  }

  let rt = create_runtime()?;

  let sprint_id = match args.sprint_id {
    Some(id) => id,
    None => {
      let loading = dashboard.loading_state();
      let sprints = with_spinner(&rt, "Fetching sprints...", &loading, dashboard.list_sprints(args.board));
      match pick_sprint(&sprints)? {
        Some(id) => id,
        None => {
          print_info("No sprints found.");
          return Ok(());
        }
      }
    }
  };

  let loading = dashboard.loading_state();
  let Some(report) = with_spinner(&rt, "Loading sprint data...", &loading, dashboard.sprint_report(sprint_id)) else {
    return Ok(());
  };

  if args.format == OutputFormat::Json {
    let output = MetricsOutput {
      sprint: &report.sprint,
      metrics: &report.metrics,
      completion_rate: report.metrics.completion_rate(),
      points_completion_rate: report.metrics.points_completion_rate(),
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize sprint metrics")?;
    println!("{json}");
    return Ok(());
  }

  print_header(&format!("Sprint Metrics: {}", report.sprint.name));
  println!(
    "{}",
    format_muted(&format!(
      "{} · {}",
      report.sprint.state.label(),
      format_sprint_dates(&report.sprint)
    ))
  );
  println!();
  println!("{}", render_kpi_table(&report.metrics));

  if args.issues && !report.issues.is_empty() {
    println!();
    println!(
      "{}",
      render_issue_table(&report.issues, &dashboard.settings().story_points_field)
    );
  }

  Ok(())
}

/// Ask the user to choose a sprint, starting on the active one
fn pick_sprint(sprints: &[Sprint]) -> Result<Option<u64>> {
  if sprints.is_empty() {
    return Ok(None);
  }

  let labels: Vec<String> = sprints.iter().map(sprint_label).collect();
  let default = sprints
    .iter()
    .position(|sprint| sprint.state == SprintState::Active)
    .unwrap_or(0);

  let choice = Select::with_theme(&sprintdash_theme())
    .with_prompt("Select a sprint")
    .items(&labels)
    .default(default)
    .interact()?;

  Ok(sprints.get(choice).map(|sprint| sprint.id))
}
