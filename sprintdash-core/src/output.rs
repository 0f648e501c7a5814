//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for user-facing messages and terminal output.

use owo_colors::OwoColorize;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode as a global color override
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Let owo_colors detect the terminal
      Self::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.if_supports_color(owo_colors::Stream::Stdout, |t| t.green()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.if_supports_color(owo_colors::Stream::Stderr, |t| t.red()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.if_supports_color(owo_colors::Stream::Stdout, |t| t.yellow()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.if_supports_color(owo_colors::Stream::Stdout, |t| t.blue()), message);
}

/// Print a section header
pub fn print_header(header: &str) {
  println!("\n{}", header.if_supports_color(owo_colors::Stream::Stdout, |t| t.bold()));
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  cmd.if_supports_color(owo_colors::Stream::Stdout, |t| t.purple()).to_string()
}

/// Format a file system path
pub fn format_path(path: &str) -> String {
  path.if_supports_color(owo_colors::Stream::Stdout, |t| t.bright_green()).to_string()
}

/// Format a secondary detail, such as a date range
pub fn format_muted(text: &str) -> String {
  text.if_supports_color(owo_colors::Stream::Stdout, |t| t.bright_black()).to_string()
}
