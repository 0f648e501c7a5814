//! # Prompts Module
//!
//! Provides the dialoguer theme used by the connect form and the sprint
//! picker.

use console::Style;
use dialoguer::theme::ColorfulTheme;

/// Returns the prompt theme: cyan bold prompts with a green `❯` on the active
/// item.
pub fn sprintdash_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}
