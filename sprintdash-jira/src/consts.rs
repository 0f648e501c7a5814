//! Constants for the sprintdash-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("sprintdash/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Endpoint used to verify credentials
pub const MYSELF_PATH: &str = "/rest/api/2/myself";
