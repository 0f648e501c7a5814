//! # Connection Commands
//!
//! Connect, disconnect and status commands for the Jira connection.

use anyhow::Result;
use clap::Args;
use dialoguer::{Input, Password};
use owo_colors::OwoColorize;
use sprintdash_core::creds::Credentials;
use sprintdash_core::output::{format_command, format_path, print_info, print_success, print_warning};
use sprintdash_core::prompts::sprintdash_theme;
use tracing::debug;

use super::{create_runtime, open_dashboard, with_spinner};
use crate::render::render_sprint_table;

/// Arguments for the connect command
#[derive(Args)]
pub struct ConnectArgs {
  /// Jira site domain (e.g., acme.atlassian.net)
  #[arg(long, short = 'd')]
  pub domain: Option<String>,

  /// Account email used to sign in to Jira
  #[arg(long, short = 'e', visible_alias = "account")]
  pub email: Option<String>,

  /// Jira API token
  #[arg(long, short = 't')]
  pub token: Option<String>,
}

/// Arguments for the status command
#[derive(Args)]
pub struct StatusArgs {
  /// Also verify the stored credentials against Jira
  #[arg(long)]
  pub check: bool,
}

/// Handle the connect command
///
/// Missing fields are asked for interactively. After storing the credentials
/// the sprints are fetched once so the user sees the connection working.
pub(crate) fn handle_connect_command(args: ConnectArgs) -> Result<()> {
  let mut dashboard = open_dashboard()?;
  let theme = sprintdash_theme();

  let domain = match args.domain {
    Some(domain) => domain,
    None => Input::<String>::with_theme(&theme)
      .with_prompt("Jira domain (e.g., your-domain.atlassian.net)")
      .interact_text()?,
  };
  let email = match args.email {
    Some(email) => email,
    None => Input::<String>::with_theme(&theme)
      .with_prompt("Account email")
      .interact_text()?,
  };
  let token = match args.token {
    Some(token) => token,
    None => Password::with_theme(&theme).with_prompt("API token").interact()?,
  };

  let credentials = Credentials::new(&domain, &email, &token)?;
  debug!(?credentials, "Connecting to Jira");
  dashboard.connect(credentials)?;

  let rt = create_runtime()?;
  let loading = dashboard.loading_state();
  let sprints = with_spinner(&rt, "Fetching sprints...", &loading, dashboard.list_sprints(None));
  if !sprints.is_empty() {
    println!("{}", render_sprint_table(&sprints));
  }

  Ok(())
}

/// Handle the disconnect command
pub(crate) fn handle_disconnect_command() -> Result<()> {
  let mut dashboard = open_dashboard()?;
  let was_connected = dashboard.is_connected();
  dashboard.disconnect()?;

  if was_connected {
    print_success("Disconnected from Jira. Stored credentials were removed.");
  } else {
    print_info("Not connected to Jira.");
  }

  Ok(())
}

/// Handle the status command
pub(crate) fn handle_status_command(args: StatusArgs) -> Result<()> {
  let mut dashboard = open_dashboard()?;

  let Some(credentials) = dashboard.session().credentials() else {
    print_warning(&format!(
      "Not connected to Jira. Run {} to connect.",
      format_command("sprintdash connect")
    ));
    return Ok(());
  };

  print_info("Connected to Jira:");
  println!("  {}: {}", "Domain".bold(), credentials.domain);
  println!("  {}: {}", "Account".bold(), credentials.account_id);
  println!(
    "  {}: {}",
    "Stored in".bold(),
    format_path(&dashboard.session().store().path().display().to_string())
  );

  if args.check {
    let rt = create_runtime()?;
    let loading = dashboard.loading_state();
    match with_spinner(&rt, "Checking credentials...", &loading, dashboard.check_connection()) {
      Some(true) => print_success("Jira accepted the stored credentials."),
      Some(false) => print_warning("Jira rejected the stored credentials. Run `sprintdash connect` again."),
      None => {}
    }
  }

  Ok(())
}
