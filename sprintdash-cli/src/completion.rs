//! # Shell Completion
//!
//! Generates shell completion scripts so sprintdash commands and flags can be
//! tab-completed.

use std::io;

use anyhow::{Result, bail};
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Parse a shell name accepted by the completion command
pub fn parse_shell(name: &str) -> Result<Shell> {
  match name {
    "bash" => Ok(Shell::Bash),
    "zsh" => Ok(Shell::Zsh),
    "fish" => Ok(Shell::Fish),
    other => bail!("Unsupported shell: {other}"),
  }
}

/// Generate shell completions for the specified shell
pub fn generate_completions(shell: Shell) -> Result<()> {
  let mut cmd = Cli::command();
  let app_name = cmd.get_name().to_string();

  generate(shell, &mut cmd, app_name, &mut io::stdout());

  Ok(())
}
