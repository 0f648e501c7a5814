//! # Jira Agile API Endpoints
//!
//! Endpoint implementations for the Agile resources sprintdash reads: boards,
//! their sprints, and the issues committed to a sprint.

pub mod boards;
pub mod sprints;
