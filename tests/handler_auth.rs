mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_signup_returns_token_and_member() {
    let server = common::server(common::create_test_state());

    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "name": "김철수", "email": "kim@example.com", "password": "pw" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["token"].as_str().unwrap().len(), 12);
    assert_eq!(
        json["user"],
        json!({ "name": "김철수", "email": "kim@example.com", "type": "member" })
    );
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let server = common::server(common::create_test_state());

    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "email": "kim@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["missing"],
        json!(["name", "password"])
    );
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let server = common::server(common::create_test_state());
    common::signup(&server, "김철수", "kim@example.com").await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "name": "다른사람", "email": "kim@example.com", "password": "x" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_login_flow() {
    let server = common::server(common::create_test_state());
    common::signup(&server, "김철수", "kim@example.com").await;

    let wrong = server
        .post("/api/auth/login")
        .json(&json!({ "email": "kim@example.com", "password": "nope" }))
        .await;
    wrong.assert_status(StatusCode::UNAUTHORIZED);

    let ok = server
        .post("/api/auth/login")
        .json(&json!({ "email": "kim@example.com", "password": "secret-pass" }))
        .await;
    ok.assert_status_ok();

    let token = ok.json::<Value>()["token"].as_str().unwrap().to_string();
    let me = server
        .get("/api/auth/me")
        .add_header("Authorization", common::bearer(&token))
        .await;

    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["email"], "kim@example.com");
}

#[tokio::test]
async fn test_guest_has_no_token() {
    let server = common::server(common::create_test_state());

    let response = server.post("/api/auth/guest").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(json.get("token").is_none());
    assert_eq!(json["user"]["type"], "guest");
    assert_eq!(json["user"]["name"], "게스트");
}

#[tokio::test]
async fn test_rename_updates_session_and_login() {
    let server = common::server(common::create_test_state());
    let token = common::signup(&server, "김철수", "kim@example.com").await;

    let renamed = server
        .patch("/api/auth/me")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "name": "김영수" }))
        .await;

    renamed.assert_status_ok();
    assert_eq!(renamed.json::<Value>()["name"], "김영수");

    let login = server
        .post("/api/auth/login")
        .json(&json!({ "email": "kim@example.com", "password": "secret-pass" }))
        .await;
    assert_eq!(login.json::<Value>()["user"]["name"], "김영수");
}

#[tokio::test]
async fn test_rename_rejects_blank_name() {
    let server = common::server(common::create_test_state());
    let token = common::signup(&server, "김철수", "kim@example.com").await;

    let response = server
        .patch("/api/auth/me")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "name": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let server = common::server(common::create_test_state());
    let token = common::signup(&server, "김철수", "kim@example.com").await;

    server
        .post("/api/auth/logout")
        .add_header("Authorization", common::bearer(&token))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let me = server
        .get("/api/auth/me")
        .add_header("Authorization", common::bearer(&token))
        .await;

    me.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_header() {
    let server = common::server(common::create_test_state());

    let response = server.get("/api/auth/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"]["code"], "unauthorized");
}
