//! Tests for the OpenAI-compatible client against a mock upstream.

use mockito::Matcher;
use readmeriser_core::{GenerationSettings, ProjectDetails, readme_request};
use readmeriser_error::GenerationErrorKind;
use readmeriser_interface::ReadmeDriver;
use readmeriser_models::OpenAICompatibleClient;
use serde_json::json;
use std::io::Write;
use std::time::Duration;

const CHAT_PATH: &str = "/api/v1/chat/completions";

fn client_for(url: String) -> OpenAICompatibleClient {
    OpenAICompatibleClient::new(
        "test-key".to_string(),
        "meta-llama/llama-3.1-8b-instruct:free".to_string(),
        url,
        "openrouter",
    )
}

fn sample_request() -> readmeriser_core::GenerateRequest {
    let details = ProjectDetails::from_fields("ferris", "A crab", "", "", "");
    readme_request(&details, &GenerationSettings::default())
}

#[tokio::test]
async fn test_success_returns_content_verbatim() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", CHAT_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [{ "message": { "role": "assistant", "content": "# Hello" } }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(format!("{}{}", server.url(), CHAT_PATH));
    let text = client.generate_text(&sample_request()).await?;

    assert_eq!(text, "# Hello");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_sends_expected_payload_and_headers() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", CHAT_PATH)
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_header("x-title", "README Generator")
        .match_header("http-referer", "http://localhost:10000/")
        .match_body(Matcher::PartialJson(json!({
            "model": "meta-llama/llama-3.1-8b-instruct:free",
            "max_tokens": 1500,
            "temperature": 0.7,
            "messages": [
                { "role": "system", "content": "You are a creative README generator." }
            ]
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#)
        .create_async()
        .await;

    let client = client_for(format!("{}{}", server.url(), CHAT_PATH));
    let request = sample_request().with_referer("http://localhost:10000/");
    client.generate(&request).await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_usage_is_reported() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", CHAT_PATH)
        .with_status(200)
        .with_body(
            json!({
                "choices": [{ "message": { "role": "assistant", "content": "hi" } }],
                "usage": { "prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(format!("{}{}", server.url(), CHAT_PATH));
    let response = client.generate(&sample_request()).await?;

    let usage = response.usage().as_ref().expect("usage present");
    assert_eq!(*usage.total_tokens(), 15);
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_is_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", CHAT_PATH)
        .with_status(401)
        .with_body(r#"{"error":{"message":"No auth credentials found"}}"#)
        .create_async()
        .await;

    let client = client_for(format!("{}{}", server.url(), CHAT_PATH));
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("401 must fail");

    assert_eq!(err.status(), Some(401));
    let message = err.kind().to_string();
    assert!(message.contains("HTTP Error: 401"), "got: {}", message);
    assert!(message.contains("No auth credentials found"));
}

#[tokio::test]
async fn test_network_failure_is_unexpected_error() {
    // Nothing listens on port 1.
    let url = "http://127.0.0.1:1/api/v1/chat/completions".to_string();
    let raw = reqwest::Client::new()
        .post(&url)
        .send()
        .await
        .expect_err("connection must be refused")
        .to_string();

    let client = client_for(url);
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("connection must be refused");

    let message = err.kind().to_string();
    assert!(message.starts_with("Unexpected Error:"), "got: {}", message);
    assert!(message.contains(&raw), "got: {}", message);
    assert!(!err.is_http());
}

#[tokio::test]
async fn test_malformed_json_is_unexpected_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", CHAT_PATH)
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let client = client_for(format!("{}{}", server.url(), CHAT_PATH));
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("malformed body must fail");

    assert!(matches!(err.kind(), GenerationErrorKind::Unexpected(_)));
    assert!(err.kind().to_string().starts_with("Unexpected Error:"));
}

#[tokio::test]
async fn test_missing_choices_is_unexpected_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", CHAT_PATH)
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let client = client_for(format!("{}{}", server.url(), CHAT_PATH));
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("empty choices must fail");

    assert_eq!(
        err.kind(),
        &GenerationErrorKind::Unexpected("No choices in response".to_string())
    );
}

#[tokio::test]
async fn test_timeout_is_unexpected_error() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", CHAT_PATH)
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_millis(500));
            w.write_all(br#"{"choices":[{"message":{"role":"assistant","content":"late"}}]}"#)
        })
        .create_async()
        .await;

    let client =
        client_for(format!("{}{}", server.url(), CHAT_PATH)).with_timeout(Duration::from_millis(50))?;
    let err = client
        .generate(&sample_request())
        .await
        .expect_err("timeout must fail");

    assert!(matches!(err.kind(), GenerationErrorKind::Unexpected(_)));
    Ok(())
}

#[test]
fn test_driver_metadata() {
    let client = client_for("http://localhost/chat".to_string());
    assert_eq!(client.provider_name(), "openrouter");
    assert_eq!(client.model_name(), "meta-llama/llama-3.1-8b-instruct:free");
    assert_eq!(client.endpoint(), "http://localhost/chat");
}
