//! # Jira Board Endpoints

use anyhow::Result;

use crate::client::JiraClient;
use crate::models::{Board, ValuesPage};

impl JiraClient {
  /// List the boards visible to the authenticated user
  pub async fn list_boards(&self) -> Result<Vec<Board>> {
    let page: ValuesPage<Board> = self.get_agile("/board", "boards").await?;
    Ok(page.values)
  }

  /// The first board visible to the authenticated user
  pub async fn first_board(&self) -> Result<Option<Board>> {
    Ok(self.list_boards().await?.into_iter().next())
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::models::JiraAuth;

  fn test_client(base_url: &str) -> JiraClient {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    JiraClient::new(base_url, auth)
  }

  #[tokio::test]
  async fn test_list_boards() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/board"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "maxResults": 50,
          "startAt": 0,
          "isLast": true,
          "values": [
              { "id": 84, "name": "ACME board", "type": "scrum" },
              { "id": 92, "name": "Ops board", "type": "kanban" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let boards = client.list_boards().await?;
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].id, 84);
    assert_eq!(boards[0].name, "ACME board");
    assert_eq!(boards[1].board_type.as_deref(), Some("kanban"));

    let first = client.first_board().await?;
    assert_eq!(first.map(|board| board.id), Some(84));

    Ok(())
  }

  #[tokio::test]
  async fn test_first_board_when_none_exist() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/board"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "values": [] })))
      .mount(&mock_server)
      .await;

    assert!(client.first_board().await?.is_none());
    Ok(())
  }

  #[tokio::test]
  async fn test_list_boards_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/board"))
      .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
          "errorMessages": ["Forbidden"],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.list_boards().await;
    assert!(result.unwrap_err().to_string().contains("Authentication failed"));

    Ok(())
  }
}
