//! # Sprintdash CLI Library
//!
//! Command tree, dashboard orchestration, notifications and terminal rendering
//! for the sprintdash tool.

pub mod cli;
pub mod completion;
pub mod dashboard;
pub mod notify;
pub mod render;
