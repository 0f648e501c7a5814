//! # Board and Sprint Commands
//!
//! Listing commands for the boards and sprints of the connected Jira site.

use anyhow::{Context, Result};
use clap::Args;
use sprintdash_core::output::{format_command, print_info, print_warning};

use super::{OutputFormat, create_runtime, open_dashboard, with_spinner};
use crate::render::{render_board_table, render_sprint_table};

/// Arguments for the sprints command
#[derive(Args)]
pub struct SprintsArgs {
  /// Board whose sprints are listed
  #[arg(long, short = 'b')]
  pub board: Option<u64>,

  /// Output format
  #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,
}

pub(super) fn print_not_connected() {
  print_warning(&format!(
    "Not connected to Jira. Run {} first.",
    format_command("sprintdash connect")
  ));
}

/// Handle the boards command
pub(crate) fn handle_boards_command() -> Result<()> {
  let mut dashboard = open_dashboard()?;
  if !dashboard.is_connected() {
    print_not_connected();
    return Ok(());
  }

  let rt = create_runtime()?;
  let loading = dashboard.loading_state();
  let boards = with_spinner(&rt, "Fetching boards...", &loading, dashboard.list_boards());

  if boards.is_empty() {
    print_info("No boards found.");
  } else {
    println!("{}", render_board_table(&boards));
  }

  Ok(())
}

/// Handle the sprints command
pub(crate) fn handle_sprints_command(args: SprintsArgs) -> Result<()> {
  let mut dashboard = open_dashboard()?;
  if !dashboard.is_connected() {
    print_not_connected();
    return Ok(());
  }

  let rt = create_runtime()?;
  let loading = dashboard.loading_state();
  let sprints = with_spinner(&rt, "Fetching sprints...", &loading, dashboard.list_sprints(args.board));

  match args.format {
    OutputFormat::Json => {
      let json = serde_json::to_string_pretty(&sprints).context("Failed to serialize sprints")?;
      println!("{json}");
    }
    OutputFormat::Text if sprints.is_empty() => print_info("No sprints found."),
    OutputFormat::Text => println!("{}", render_sprint_table(&sprints)),
  }

  Ok(())
}
