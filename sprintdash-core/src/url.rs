//! URL helpers for turning a configured Jira domain into API base URLs.

use anyhow::{Context, Result};
use url::Url;

/// Versioned path prefix of the Jira Agile REST API
pub const AGILE_API_PREFIX: &str = "/rest/agile/1.0";

/// Ensure a host has a proper scheme (http:// or https://).
///
/// A bare domain such as `acme.atlassian.net` gets `https://`; an explicit
/// `http://` or `https://` is kept. A context path such as `/jira` on a
/// self-hosted server is kept without its trailing slash; queries and
/// fragments are dropped so the result can be used as a base URL.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse URL: '{input}'"))?;
  let host = url
    .host_str()
    .ok_or_else(|| anyhow::anyhow!("URL must have a valid host: '{input}'"))?;

  let mut base = format!("{}://{}", url.scheme(), host);
  if let Some(port) = url.port() {
    base.push_str(&format!(":{port}"));
  }
  base.push_str(url.path().trim_end_matches('/'));

  Ok(base)
}

#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::*;

  #[test_case("acme.atlassian.net", "https://acme.atlassian.net" ; "bare domain")]
  #[test_case("https://acme.atlassian.net", "https://acme.atlassian.net" ; "https kept")]
  #[test_case("http://jira.internal", "http://jira.internal" ; "http kept")]
  #[test_case("HTTPS://Acme.Atlassian.net/", "https://acme.atlassian.net" ; "case and trailing slash")]
  #[test_case("  acme.atlassian.net  ", "https://acme.atlassian.net" ; "whitespace")]
  #[test_case("localhost:8080", "https://localhost:8080" ; "port")]
  #[test_case("http://127.0.0.1:9000/jira", "http://127.0.0.1:9000/jira" ; "context path kept")]
  #[test_case("jira.acme.test/jira/", "https://jira.acme.test/jira" ; "context path trailing slash")]
  #[test_case("https://jira.acme.test/jira?os_authType=basic#top", "https://jira.acme.test/jira" ; "query dropped")]
  fn test_ensure_url_scheme(input: &str, expected: &str) {
    assert_eq!(ensure_url_scheme(input).unwrap(), expected);
  }

  #[test_case("" ; "empty")]
  #[test_case("   " ; "whitespace only")]
  fn test_ensure_url_scheme_rejects_empty(input: &str) {
    let error = ensure_url_scheme(input).unwrap_err().to_string();
    assert!(error.contains("Host cannot be empty"));
  }

  #[test]
  fn test_ensure_url_scheme_rejects_garbage() {
    assert!(ensure_url_scheme("https://").is_err());
  }
}
