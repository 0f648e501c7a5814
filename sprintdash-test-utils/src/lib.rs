//! Test utilities shared across the sprintdash workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary XDG-style directories with storage helpers ([`TestDirsGuard`])
//! - Process-wide XDG environment overrides ([`EnvTestGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod dirs;
pub mod env;

// Re-export commonly used items
pub use dirs::TestDirsGuard;
pub use env::EnvTestGuard;
