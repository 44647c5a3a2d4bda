mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

async fn analyse(server: &TestServer, token: &str, address: &str) -> String {
    let response = server
        .post("/api/analysis")
        .add_header("Authorization", common::bearer(token))
        .json(&json!({ "address": address, "businessType": "카페" }))
        .await;

    response.json::<Value>()["historyId"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_history_lists_most_recent_first() {
    let server = common::server(common::create_test_state());
    let token = common::signup(&server, "김철수", "kim@example.com").await;

    let addresses = ["서울시 강남구 1", "서울시 마포구 2", "부산시 해운대구 3"];
    for address in addresses {
        analyse(&server, &token, address).await;
    }

    let response = server
        .get("/api/history")
        .add_header("Authorization", common::bearer(&token))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 3);

    let titles: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["부산시 해운대구 - 카페", "서울시 마포구 - 카페", "서울시 강남구 - 카페"]
    );
    assert!(json["items"][0].get("result").is_none());
}

#[tokio::test]
async fn test_delete_history_item() {
    let server = common::server(common::create_test_state());
    let token = common::signup(&server, "김철수", "kim@example.com").await;
    let id = analyse(&server, &token, "서울시 강남구 1").await;

    server
        .delete(&format!("/api/history/{}", id))
        .add_header("Authorization", common::bearer(&token))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let again = server
        .delete(&format!("/api/history/{}", id))
        .add_header("Authorization", common::bearer(&token))
        .await;
    again.assert_status(StatusCode::NOT_FOUND);

    let list = server
        .get("/api/history")
        .add_header("Authorization", common::bearer(&token))
        .await;
    assert_eq!(list.json::<Value>()["total"], 0);
}

#[tokio::test]
async fn test_members_cannot_see_each_other() {
    let server = common::server(common::create_test_state());
    let kim = common::signup(&server, "김철수", "kim@example.com").await;
    let lee = common::signup(&server, "이영희", "lee@example.com").await;
    let id = analyse(&server, &kim, "서울시 강남구 1").await;

    let response = server
        .get(&format!("/api/history/{}", id))
        .add_header("Authorization", common::bearer(&lee))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_history_requires_session() {
    let server = common::server(common::create_test_state());

    server
        .get("/api/history")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
