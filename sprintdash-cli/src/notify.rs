//! # Notifications
//!
//! User-visible notifications raised by the dashboard. The console notifier
//! prints them as status lines; the recording notifier keeps them for
//! inspection.

use std::cell::RefCell;

use sprintdash_core::output::{print_error, print_success};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
  Success,
  Error,
}

/// A titled message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub level: NotificationLevel,
  pub title: String,
  pub description: String,
}

impl Notification {
  pub fn success(title: &str, description: &str) -> Self {
    Self::new(NotificationLevel::Success, title, description)
  }

  pub fn error(title: &str, description: &str) -> Self {
    Self::new(NotificationLevel::Error, title, description)
  }

  fn new(level: NotificationLevel, title: &str, description: &str) -> Self {
    Self {
      level,
      title: title.to_string(),
      description: description.to_string(),
    }
  }
}

/// Receives notifications raised by the dashboard
pub trait Notifier {
  fn notify(&self, notification: Notification);
}

/// Prints notifications to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
  fn notify(&self, notification: Notification) {
    let message = format!("{}: {}", notification.title, notification.description);
    match notification.level {
      NotificationLevel::Success => print_success(&message),
      NotificationLevel::Error => print_error(&message),
    }
  }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
  notifications: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
  pub fn new() -> Self {
    Self::default()
  }

  /// Notifications received so far, oldest first
  pub fn notifications(&self) -> Vec<Notification> {
    self.notifications.borrow().clone()
  }

  /// Descriptions of the error notifications received so far
  pub fn errors(&self) -> Vec<String> {
    self
      .notifications
      .borrow()
      .iter()
      .filter(|n| n.level == NotificationLevel::Error)
      .map(|n| n.description.clone())
      .collect()
  }
}

impl Notifier for RecordingNotifier {
  fn notify(&self, notification: Notification) {
    self.notifications.borrow_mut().push(notification);
  }
}
