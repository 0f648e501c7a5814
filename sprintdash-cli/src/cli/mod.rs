//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the sprintdash tool:
//! connecting to Jira, browsing boards and sprints, and showing sprint KPIs.

mod completion;
mod config;
mod connect;
mod metrics;
mod sprints;

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use sprintdash_core::config::get_config_dirs;
use sprintdash_core::output::ColorMode;
use tokio::runtime::Runtime;

use crate::dashboard::{LoadingState, SprintDashboard};
use crate::notify::ConsoleNotifier;

/// Top-level CLI command for the sprintdash tool
#[derive(Parser)]
#[command(name = "sprintdash")]
#[command(display_name = "📊 Sprintdash")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Sprint KPIs from Jira in your terminal")]
#[command(
  long_about = "Sprintdash connects to a Jira Cloud site and reports how a sprint went.\n\n\
        It lists the sprints of a board and derives the committed and completed issues,\n\
        story point velocity, completion rate and overspill for any of them."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the sprintdash tool
#[derive(Subcommand)]
pub enum Commands {
  /// List the Agile boards visible to your account
  #[command(long_about = "Lists the Agile boards visible to the connected Jira account.\n\n\
            Use a board ID with `sprints --board` or `config --board` to pick the board\n\
            whose sprints are shown.")]
  Boards,

  /// Generate shell completions
  #[command(long_about = "Generates shell completion scripts for sprintdash commands.\n\n\
            Supported shells are bash, zsh, and fish.")]
  Completion(completion::CompletionArgs),

  /// Show or change settings
  #[command(long_about = "Shows or changes sprintdash settings.\n\n\
            Settings include the issue field that holds story points and the board\n\
            used when none is given on the command line.")]
  Config(config::ConfigArgs),

  /// Connect to a Jira site
  #[command(long_about = "Connects sprintdash to a Jira Cloud site.\n\n\
            Asks for the site domain, your account email and an API token unless they\n\
            are given as flags. The credentials are stored locally and reused until\n\
            you disconnect.")]
  Connect(connect::ConnectArgs),

  /// Forget the stored Jira credentials
  Disconnect,

  /// Show sprint KPIs
  #[command(long_about = "Shows the KPIs of one sprint.\n\n\
            Reports committed and completed issues, story point velocity, completion\n\
            rate, overspill and the sprint health score. Without a sprint ID you are\n\
            asked to pick one of the board's sprints.")]
  #[command(alias = "m")]
  Metrics(metrics::MetricsArgs),

  /// List the sprints of a board
  #[command(long_about = "Lists the sprints of a board with their state and dates.\n\n\
            Uses the board given with --board, then the configured board, and\n\
            otherwise the first board visible to your account.")]
  #[command(alias = "ls")]
  Sprints(sprints::SprintsArgs),

  /// Show the connection status
  Status(connect::StatusArgs),
}

/// Handles the CLI command and dispatches to the appropriate handler
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Boards => sprints::handle_boards_command(),
    Commands::Completion(completion) => completion::handle_completion_command(completion),
    Commands::Config(config) => config::handle_config_command(config),
    Commands::Connect(connect) => connect::handle_connect_command(connect),
    Commands::Disconnect => connect::handle_disconnect_command(),
    Commands::Metrics(metrics) => metrics::handle_metrics_command(metrics),
    Commands::Sprints(sprints) => sprints::handle_sprints_command(sprints),
    Commands::Status(status) => connect::handle_status_command(status),
  }
}

/// Output format for commands that print data
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
  /// Tables for people
  #[default]
  Text,
  /// JSON for scripts
  Json,
}

/// Load the dashboard for the current user
fn open_dashboard() -> Result<SprintDashboard<ConsoleNotifier>> {
  let config_dirs = get_config_dirs()?;
  SprintDashboard::open(&config_dirs, ConsoleNotifier)
}

fn create_runtime() -> Result<Runtime> {
  Runtime::new().context("Failed to create async runtime")
}

/// Drive `future` to completion, showing a spinner with `message` while
/// `loading` reports a request in flight
fn with_spinner<F: Future>(rt: &Runtime, message: &str, loading: &LoadingState, future: F) -> F::Output {
  let spinner = ProgressBar::new_spinner();
  spinner.set_style(
    ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
  );
  spinner.set_message(message.to_string());

  let output = rt.block_on(async {
    tokio::pin!(future);
    let mut ticker = tokio::time::interval(Duration::from_millis(80));
    loop {
      tokio::select! {
        output = &mut future => break output,
        _ = ticker.tick() => {
          if loading.is_loading() {
            spinner.tick();
          }
        }
      }
    }
  });

  spinner.finish_and_clear();
  output
}
