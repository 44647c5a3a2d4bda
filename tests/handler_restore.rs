mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_restore_analysis_with_defaults() {
    let server = common::server(common::create_test_state());

    let response = server
        .get("/api/restore")
        .add_query_param("mode", "analysis")
        .add_query_param("addr", "Seoul Gangnam")
        .add_query_param("type", "Cafe")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["mode"], "analysis");
    assert_eq!(
        json["input"],
        json!({
            "address": "Seoul Gangnam",
            "businessType": "Cafe",
            "hours": "24시간",
            "radius": "500m"
        })
    );
    assert_eq!(json["outcome"], "fallback");
    assert_eq!(json["result"]["overallScore"], 85.0);
}

#[tokio::test]
async fn test_restore_recommendation_with_defaults() {
    let server = common::server(common::create_test_state());

    let response = server
        .get("/api/restore")
        .add_query_param("mode", "recommendation")
        .add_query_param("type", "카페")
        .add_query_param("city", "서울시")
        .add_query_param("dist", "마포구")
        .await;

    response.assert_status_ok();
    let input = &response.json::<Value>()["input"];
    assert_eq!(input["dong"], "전체");
    assert_eq!(input["hours"], "24시간");
    assert_eq!(input["budget"], "제한 없음");
    assert_eq!(input["targetAge"], "전 연령층");
    assert_eq!(input["parking"], "상관 없음");
}

#[tokio::test]
async fn test_share_query_round_trips_through_restore() {
    let server = common::server(common::create_test_state());

    let analysed = server.post("/api/analysis").json(&common::analysis_body()).await;
    let share = analysed.json::<Value>()["shareQuery"]
        .as_str()
        .unwrap()
        .to_string();

    let restored = server.get(&format!("/api/restore?{}", share)).await;

    restored.assert_status_ok();
    let json = restored.json::<Value>();
    assert_eq!(json["input"]["address"], "Seoul Gangnam");
    assert_eq!(json["input"]["hours"], "24h");
    assert_eq!(json["shareQuery"], share);
}

#[tokio::test]
async fn test_restore_is_never_recorded() {
    let server = common::server(common::create_test_state());
    let token = common::signup(&server, "김철수", "kim@example.com").await;

    let response = server
        .get("/api/restore?mode=analysis&addr=Seoul+Gangnam&type=Cafe")
        .add_header("Authorization", common::bearer(&token))
        .await;
    response.assert_status_ok();
    assert!(response.json::<Value>().get("historyId").is_none());

    let list = server
        .get("/api/history")
        .add_header("Authorization", common::bearer(&token))
        .await;
    assert_eq!(list.json::<Value>()["total"], 0);
}

#[tokio::test]
async fn test_restore_missing_parameters() {
    let server = common::server(common::create_test_state());

    let response = server.get("/api/restore?mode=analysis&type=Cafe").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["missing"],
        json!(["addr"])
    );

    server
        .get("/api/restore?addr=x&type=y")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
