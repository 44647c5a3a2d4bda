#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use bizinsight::api::handlers::health_handler;
use bizinsight::application::services::AnalysisService;
use bizinsight::infrastructure::provider::{GeminiProvider, GenerationProvider};
use bizinsight::infrastructure::store::{InMemoryStore, KeyValueStore};
use bizinsight::routes::ApiRoutes;
use bizinsight::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

pub const TEST_MODEL: &str = "gemini-test";

/// Demo-mode state with no delay and a fresh in-memory store.
pub fn create_test_state() -> AppState {
    state_with(None)
}

/// State whose provider talks to `base_url`, typically a `wiremock` server.
pub fn create_live_state(base_url: &str) -> AppState {
    let provider = GeminiProvider::new("test-key", TEST_MODEL, base_url, Duration::from_secs(5))
        .unwrap();
    state_with(Some(Arc::new(provider)))
}

fn state_with(provider: Option<Arc<dyn GenerationProvider>>) -> AppState {
    let live = provider.is_some();
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let service = AnalysisService::new(provider, Duration::ZERO, Duration::ZERO);

    AppState::new(
        store,
        service,
        "test-credential-secret".to_string(),
        live.then(|| TEST_MODEL.to_string()),
    )
}

/// Full router minus rate limiting.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", ApiRoutes::new(&state).into_router())
        .with_state(state)
}

pub fn server(state: AppState) -> TestServer {
    TestServer::new(app(state)).unwrap()
}

/// Signs up a member and returns the bearer token.
pub async fn signup(server: &TestServer, name: &str, email: &str) -> String {
    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "name": name, "email": email, "password": "secret-pass" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn analysis_body() -> Value {
    json!({
        "address": "Seoul Gangnam",
        "businessType": "Cafe",
        "hours": "24h",
        "radius": "500m"
    })
}

pub fn recommendation_body() -> Value {
    json!({
        "businessType": "카페",
        "city": "서울시",
        "district": "마포구"
    })
}

/// A Gemini `generateContent` response whose single candidate says `text`.
pub fn gemini_reply(text: &str, grounding: Value) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "groundingMetadata": { "groundingChunks": grounding }
        }]
    })
}
