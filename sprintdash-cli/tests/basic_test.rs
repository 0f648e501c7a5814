use std::process::{Command, Output};

use assert_cmd::cargo::CommandCargoExt;
use assert_cmd::prelude::OutputAssertExt;
use predicates::prelude::*;
use sprintdash_test_utils::TestDirsGuard;

fn sprintdash(guard: &TestDirsGuard) -> Command {
  let mut cmd = Command::cargo_bin("sprintdash").expect("Failed to find sprintdash binary");
  cmd.envs(guard.xdg_vars()).env_remove("RUST_LOG");
  cmd
}

/// Run the binary off the async runtime so mock servers keep responding
async fn run(guard: &TestDirsGuard, args: &[&str]) -> Output {
  let mut cmd = sprintdash(guard);
  cmd.args(args);
  tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
    .await
    .expect("Command task panicked")
}

#[test]
fn test_help_command() {
  let guard = TestDirsGuard::new();

  sprintdash(&guard)
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("connect"))
    .stdout(predicate::str::contains("sprints"))
    .stdout(predicate::str::contains("metrics"));
}

#[test]
fn test_completion_command() {
  let guard = TestDirsGuard::new();

  sprintdash(&guard)
    .args(["completion", "bash"])
    .assert()
    .success()
    .stdout(predicate::str::contains("sprintdash"));
}

#[test]
fn test_connect_rejects_empty_token() {
  let guard = TestDirsGuard::new();

  sprintdash(&guard)
    .args(["connect", "--domain", "acme.atlassian.net", "--email", "dev@acme.test", "--token", " "])
    .assert()
    .failure()
    .stderr(predicate::str::contains("API token cannot be empty"));

  assert!(guard.read_storage().is_none());
}

#[cfg(target_os = "linux")]
mod linux {
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  #[test]
  fn test_status_when_disconnected() {
    let guard = TestDirsGuard::new();

    sprintdash(&guard)
      .arg("status")
      .assert()
      .success()
      .stdout(predicate::str::contains("Not connected to Jira"));
  }

  #[test]
  fn test_sprints_when_disconnected() {
    let guard = TestDirsGuard::new();

    sprintdash(&guard)
      .arg("sprints")
      .assert()
      .success()
      .stdout(predicate::str::contains("Not connected to Jira"));
  }

  #[test]
  fn test_disconnect_removes_undecodable_record() {
    let guard = TestDirsGuard::new();
    let record = r#"{"domain":"acme.atlassian.net","accountId":"dev@acme.io"}"#;
    guard.write_storage(&serde_json::json!({ "jiraConfig": record }).to_string());

    sprintdash(&guard)
      .arg("status")
      .assert()
      .success()
      .stdout(predicate::str::contains("Not connected to Jira"));

    sprintdash(&guard).arg("disconnect").assert().success();

    assert!(guard.read_storage().is_some_and(|content| !content.contains("jiraConfig")));
  }

  #[test]
  fn test_config_rejects_blank_story_points_field() {
    let guard = TestDirsGuard::new();

    sprintdash(&guard)
      .args(["config", "--story-points-field", " "])
      .assert()
      .failure()
      .stderr(predicate::str::contains("Story points field cannot be empty"));

    assert!(!guard.settings_path().exists());
  }

  #[test]
  fn test_config_board_round_trip() {
    let guard = TestDirsGuard::new();

    sprintdash(&guard)
      .args(["config", "--board", "7", "--story-points-field", "customfield_10026"])
      .assert()
      .success();

    sprintdash(&guard)
      .args(["config", "--show"])
      .assert()
      .success()
      .stdout(predicate::str::contains("Board: 7"))
      .stdout(predicate::str::contains("customfield_10026"));

    sprintdash(&guard).args(["config", "--clear-board"]).assert().success();

    sprintdash(&guard)
      .arg("config")
      .assert()
      .success()
      .stdout(predicate::str::contains("Board: First available"));
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn test_connect_metrics_disconnect() {
    let guard = TestDirsGuard::new();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/board"))
      .and(basic_auth("dev@acme.test", "secret"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "values": [{ "id": 1, "name": "ACME board", "type": "scrum" }]
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/board/1/sprint"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "values": [{ "id": 12, "name": "Sprint 12", "state": "active" }]
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/sprint/12"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": 12, "name": "Sprint 12", "state": "active"
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/sprint/12/issue"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "issues": [
              {
                  "id": "1", "key": "ACME-1",
                  "fields": { "status": { "name": "Done", "statusCategory": { "key": "done" } }, "customfield_10016": 5 }
              },
              {
                  "id": "2", "key": "ACME-2",
                  "fields": { "status": { "name": "Done", "statusCategory": { "key": "done" } }, "customfield_10016": 3 }
              },
              {
                  "id": "3", "key": "ACME-3",
                  "fields": { "status": { "name": "In Progress", "statusCategory": { "key": "indeterminate" } }, "customfield_10016": 2 }
              }
          ]
      })))
      .mount(&mock_server)
      .await;

    let domain = mock_server.uri();

    let output = run(
      &guard,
      &["connect", "--domain", &domain, "--email", "dev@acme.test", "--token", "secret"],
    )
    .await;
    output
      .assert()
      .success()
      .stdout(predicate::str::contains("Successfully connected to Jira"))
      .stdout(predicate::str::contains("Sprint 12"));
    assert!(guard.read_storage().is_some_and(|content| content.contains("jiraConfig")));

    let output = run(&guard, &["metrics", "12"]).await;
    output
      .assert()
      .success()
      .stdout(predicate::str::contains("Sprint Health Score"))
      .stdout(predicate::str::contains("80%"))
      .stdout(predicate::str::contains("67%"));

    let output = run(&guard, &["metrics", "12", "--format", "json"]).await;
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("metrics output should be JSON");
    assert_eq!(json["metrics"]["committedIssues"], 3);
    assert_eq!(json["metrics"]["velocity"], 8.0);

    run(&guard, &["disconnect"]).await.assert().success();
    assert!(guard.read_storage().is_some_and(|content| !content.contains("jiraConfig")));

    run(&guard, &["metrics", "12"])
      .await
      .assert()
      .success()
      .stdout(predicate::str::contains("Not connected to Jira"));
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn test_metrics_failure_is_reported() {
    let guard = TestDirsGuard::new();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/sprint/99"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let stored = serde_json::json!({
        "domain": mock_server.uri(),
        "accountId": "dev@acme.test",
        "token": "secret"
    });
    let storage = serde_json::json!({ "jiraConfig": stored.to_string() });
    guard.write_storage(&storage.to_string());

    run(&guard, &["metrics", "99"])
      .await
      .assert()
      .success()
      .stderr(predicate::str::contains("Failed to fetch sprint data from Jira"));
  }
}
