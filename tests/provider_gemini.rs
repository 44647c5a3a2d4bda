mod common;

use bizinsight::domain::grounding::{GroundingChunk, extract_sources};
use bizinsight::infrastructure::provider::{GeminiProvider, GenerationProvider, ProviderError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(mock: &MockServer) -> GeminiProvider {
    GeminiProvider::new("test-key", "gemini-test", &mock.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_request_carries_key_prompt_and_tools() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "분석해 주세요" }] }],
            "tools": [{ "googleMaps": {} }, { "googleSearch": {} }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::gemini_reply("{}", json!([]))),
        )
        .expect(1)
        .mount(&mock)
        .await;

    let generation = provider(&mock).generate("분석해 주세요").await.unwrap();

    assert_eq!(generation.text, "{}");
    assert!(generation.grounding.is_empty());
}

#[tokio::test]
async fn test_grounding_chunks_become_sources() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::gemini_reply(
            "{}",
            json!([
                { "web": { "uri": "https://news.example/a", "title": "상권 뉴스" } },
                { "maps": { "uri": "https://maps.example/x", "sourcePlace": { "uri": "https://maps.example/place", "name": "카페 거리" } } },
                { "maps": { "uri": "https://maps.example/generic" } },
                { "web": { "uri": "https://news.example/a", "title": "중복" } },
                { "retrievedContext": { "text": "no link" } }
            ]),
        )))
        .mount(&mock)
        .await;

    let generation = provider(&mock).generate("prompt").await.unwrap();

    assert_eq!(generation.grounding.len(), 5);
    assert_eq!(generation.grounding[4], GroundingChunk::Unknown);

    let sources = extract_sources(&generation.grounding);
    let pairs: Vec<(&str, &str)> = sources
        .iter()
        .map(|s| (s.title.as_str(), s.url.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("상권 뉴스", "https://news.example/a"),
            ("카페 거리", "https://maps.example/place"),
            ("Google Maps", "https://maps.example/generic"),
        ]
    );
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&mock)
        .await;

    let err = provider(&mock).generate("prompt").await.unwrap_err();

    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_reported() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock)
        .await;

    let err = provider(&mock).generate("prompt").await.unwrap_err();

    assert!(matches!(err, ProviderError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let provider =
        GeminiProvider::new("k", "gemini-test", "http://127.0.0.1:9", Duration::from_secs(1))
            .unwrap();

    let err = provider.generate("prompt").await.unwrap_err();

    assert!(matches!(err, ProviderError::Transport(_)));
}
