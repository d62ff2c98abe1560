//! Integration tests for `RewriteClient` using wiremock HTTP mocks.

use brandscope_core::{CopyField, Language, Tone};
use brandscope_rewrite::{RewriteClient, RewriteRequest};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> RewriteClient {
    RewriteClient::with_base_url("test-key", "test-model", 5, 500, base_url)
        .expect("client construction should not fail")
}

fn request() -> RewriteRequest {
    RewriteRequest {
        tone: Tone::Friendly,
        language: Language::Es,
        fields: vec![
            CopyField {
                path: "hero.headline".to_owned(),
                text: "Send money home with Banco Azul".to_owned(),
            },
            CopyField {
                path: "finalCta.button".to_owned(),
                text: "Get started".to_owned(),
            },
        ],
        style_hints: Some("short sentences".to_owned()),
        client_name: Some("Banco Azul".to_owned()),
    }
}

fn text_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn"
    })
}

#[tokio::test]
async fn rewrite_returns_parsed_rewrites() {
    let server = MockServer::start().await;

    let model_json = serde_json::json!({
        "rewrites": [
            { "path": "hero.headline", "text": "Envía dinero a casa con Banco Azul" },
            { "path": "finalCta.button", "text": "Empieza ya" }
        ],
        "warnings": []
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "max_tokens": 500
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply(&model_json)))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server.uri()).rewrite(&request()).await;

    assert!(response.warnings.is_empty());
    assert_eq!(response.rewrites.len(), 2);
    assert_eq!(response.rewrites[0].path, "hero.headline");
    assert_eq!(response.rewrites[1].text, "Empieza ya");
}

#[tokio::test]
async fn fenced_model_output_is_accepted() {
    let server = MockServer::start().await;

    let fenced = "```json\n{\"rewrites\":[{\"path\":\"hero.headline\",\"text\":\"Hola\"}]}\n```";
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply(fenced)))
        .mount(&server)
        .await;

    let response = test_client(&server.uri()).rewrite(&request()).await;

    assert_eq!(response.rewrites.len(), 1);
    assert_eq!(response.rewrites[0].text, "Hola");
    assert!(response.warnings.is_empty());
}

#[tokio::test]
async fn server_error_degrades_to_unavailable_warning() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let response = test_client(&server.uri()).rewrite(&request()).await;

    assert!(response.rewrites.is_empty());
    assert_eq!(
        response.warnings,
        vec!["AI rewrite service temporarily unavailable"]
    );
}

#[tokio::test]
async fn prose_reply_degrades_to_parse_warning() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(text_reply("I cannot rewrite fee wording.")),
        )
        .mount(&server)
        .await;

    let response = test_client(&server.uri()).rewrite(&request()).await;

    assert!(response.rewrites.is_empty());
    assert_eq!(response.warnings, vec!["Failed to parse rewrite response"]);
}

#[tokio::test]
async fn non_text_reply_degrades_to_format_warning() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "content": [{ "type": "tool_use", "id": "t1", "name": "noop", "input": {} }]
    });
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let response = test_client(&server.uri()).rewrite(&request()).await;

    assert!(response.rewrites.is_empty());
    assert_eq!(
        response.warnings,
        vec!["Unexpected response format from AI service"]
    );
}

#[tokio::test]
async fn empty_request_makes_no_http_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut empty = request();
    empty.fields.clear();
    let response = test_client(&server.uri()).rewrite(&empty).await;

    assert!(response.rewrites.is_empty());
    assert!(response.warnings.is_empty());
}
