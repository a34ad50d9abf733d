use chrono::{Days, Local};
use serde_json::json;
use std::process::{Command, Output};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the binary with only the given variables set, away from any `.env` file.
fn remind(vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_remind"))
        .env_clear()
        .envs(vars.iter().copied())
        .current_dir(std::env::temp_dir())
        .output()
        .expect("failed to launch remind")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_missing_config_exits_non_zero() {
    let output = remind(&[("NOTION_TOKEN", "secret_notion"), ("SLACK_CHANNEL_ID", "C123")]);

    assert_eq!(output.status.code(), Some(1));
    let log = stderr(&output);
    assert!(log.contains("NOTION_TOKEN, SLACK_BOT_TOKEN, SLACK_CHANNEL_ID, NOTION_DATABASE_ID"));
    assert!(log.contains("not set: SLACK_BOT_TOKEN, NOTION_DATABASE_ID"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_failure_is_logged_and_exits_zero() {
    let notion = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/databases/db-1/query"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "API token is invalid."
        })))
        .expect(1)
        .mount(&notion)
        .await;
    let slack = MockServer::start().await;

    let notion_url = notion.uri();
    let slack_url = slack.uri();
    let output = remind(&[
        ("NOTION_TOKEN", "secret_notion"),
        ("SLACK_BOT_TOKEN", "xoxb-test"),
        ("SLACK_CHANNEL_ID", "C123"),
        ("NOTION_DATABASE_ID", "db-1"),
        ("NOTION_API_URL", notion_url.as_str()),
        ("SLACK_API_URL", slack_url.as_str()),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Notion API Error: unauthorized (HTTP 401)"));
    assert!(slack.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_date_is_logged_and_exits_zero() {
    let tomorrow = (Local::now().date_naive() + Days::new(1))
        .format("%Y-%m-%d")
        .to_string();
    let notion = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/databases/db-1/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "id": "a",
                    "properties": {
                        "first_draft_date": { "type": "date", "date": { "start": tomorrow } }
                    }
                },
                {
                    "id": "b",
                    "properties": {
                        "ready_by_date": { "type": "date", "date": { "start": "2024-13-40" } }
                    }
                }
            ],
            "has_more": false
        })))
        .mount(&notion)
        .await;
    let slack = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat.postMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&slack)
        .await;

    let notion_url = notion.uri();
    let slack_url = slack.uri();
    let output = remind(&[
        ("NOTION_TOKEN", "secret_notion"),
        ("SLACK_BOT_TOKEN", "xoxb-test"),
        ("SLACK_CHANNEL_ID", "C123"),
        ("NOTION_DATABASE_ID", "db-1"),
        ("NOTION_API_URL", notion_url.as_str()),
        ("SLACK_API_URL", slack_url.as_str()),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let log = stderr(&output);
    assert!(log.contains("An unexpected error occurred"));
    assert!(log.contains("invalid milestone date in record b"));
    assert_eq!(log.matches("'2024-13-40'").count(), 1);
}
