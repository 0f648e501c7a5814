//! # Config Command
//!
//! Shows and updates the persisted settings.

use anyhow::{Result, bail};
use clap::Args;
use sprintdash_core::config::{ConfigDirs, Settings, get_config_dirs};
use sprintdash_core::output::{format_path, print_info, print_success};

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
  /// Issue field holding story point estimates (e.g., customfield_10016)
  #[arg(long)]
  pub story_points_field: Option<String>,

  /// Board used when none is given on the command line
  #[arg(long, conflicts_with = "clear_board")]
  pub board: Option<u64>,

  /// Forget the configured board
  #[arg(long)]
  pub clear_board: bool,

  /// Show current configuration
  #[arg(long)]
  pub show: bool,
}

/// Handle the config command
pub(crate) fn handle_config_command(args: ConfigArgs) -> Result<()> {
  let config_dirs = get_config_dirs()?;
  let mut settings = config_dirs.load_settings()?;

  let mut changes = Vec::new();

  if let Some(field) = args.story_points_field {
    let field = field.trim();
    if field.is_empty() {
      bail!("Story points field cannot be empty");
    }
    settings.story_points_field = field.to_string();
    changes.push(format!("story points field set to: {field}"));
  }

  if let Some(board) = args.board {
    settings.board_id = Some(board);
    changes.push(format!("board set to: {board}"));
  }

  if args.clear_board {
    settings.board_id = None;
    changes.push("board cleared".to_string());
  }

  if changes.is_empty() {
    show_settings(&config_dirs, &settings);
    return Ok(());
  }

  config_dirs.save_settings(&settings)?;

  print_success("Configuration updated:");
  for change in changes {
    print_success(&format!("  {change}"));
  }

  if args.show {
    show_settings(&config_dirs, &settings);
  }

  Ok(())
}

fn show_settings(config_dirs: &ConfigDirs, settings: &Settings) {
  print_info("Current configuration:");
  println!("  Story points field: {}", settings.story_points_field);
  match settings.board_id {
    Some(board) => println!("  Board: {board}"),
    None => println!("  Board: First available"),
  }
  println!(
    "  Settings file: {}",
    format_path(&config_dirs.settings_path().display().to_string())
  );
}
