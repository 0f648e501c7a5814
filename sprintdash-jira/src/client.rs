use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use sprintdash_core::url::{AGILE_API_PREFIX, ensure_url_scheme};
use tracing::{debug, trace};

use crate::consts::{MYSELF_PATH, USER_AGENT};
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client for a site base URL such as
  /// `https://acme.atlassian.net`
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .unwrap_or_else(|_| Client::new());
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// The site base URL requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let url = format!("{}{MYSELF_PATH}", self.base_url);

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .header(ACCEPT, "application/json")
      .send()
      .await
      .context("Failed to connect to Jira")?;

    Ok(response.status().is_success())
  }

  /// GET an Agile API endpoint and decode the JSON body.
  ///
  /// `what` names the resource in error messages.
  pub(crate) async fn get_agile<T: DeserializeOwned>(&self, endpoint: &str, what: &str) -> Result<T> {
    let url = format!("{}{AGILE_API_PREFIX}{endpoint}", self.base_url);
    debug!("GET {url}");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .header(ACCEPT, "application/json")
      .header(CONTENT_TYPE, "application/json")
      .send()
      .await
      .with_context(|| format!("Failed to fetch {what}"))?;

    let status = response.status();
    trace!(%status, "Response for {url}");

    match status {
      StatusCode::OK => response
        .json::<T>()
        .await
        .with_context(|| format!("Failed to parse {what}")),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("{} not found", capitalize(what))),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}

fn capitalize(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Create a Jira client from a configured domain and credentials.
///
/// A domain without a scheme is assumed to be served over https.
pub fn create_jira_client(domain: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let base_url = ensure_url_scheme(domain).context("Invalid Jira domain")?;
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  Ok(JiraClient::new(&base_url, auth))
}
