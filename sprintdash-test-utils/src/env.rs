//! Environment variable management for testing
//!
//! This module provides utilities for managing XDG environment variables
//! during testing to ensure tests don't interfere with the user's real
//! configuration.

use std::env;
use std::path::PathBuf;

use crate::dirs::TestDirsGuard;

/// Overrides the process XDG directories with a [`TestDirsGuard`] tree and
/// restores the previous values when dropped
pub struct EnvTestGuard {
  /// The directory tree the XDG variables point at
  pub dirs: TestDirsGuard,
  /// The original values, if any
  originals: Vec<(&'static str, Option<String>)>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  /// Create a new test environment with overridden XDG directories
  pub fn new() -> Self {
    let dirs = TestDirsGuard::new();
    let mut originals = Vec::new();

    for (key, value) in dirs.xdg_vars() {
      originals.push((key, env::var(key).ok()));
      unsafe {
        env::set_var(key, value);
      }
    }

    Self { dirs, originals }
  }

  /// Application config directory inside the override
  pub fn config_dir(&self) -> PathBuf {
    self.dirs.config_dir()
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    for (key, original) in &self.originals {
      match original {
        Some(val) => unsafe {
          env::set_var(key, val);
        },
        None => unsafe {
          env::remove_var(key);
        },
      }
    }
  }
}
