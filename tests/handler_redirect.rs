mod common;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use fact_service::api::handlers::{create_fact_handler, redirect_handler};
use serde_json::Value;

fn test_app(state: fact_service::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/facts", post(create_fact_handler))
        .route("/facts/{alias}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_returns_permanent_redirect_to_original_url() {
    let provider = Arc::new(common::ScriptedFactProvider::new(vec![
        common::upstream_fact(
            "f1",
            "Bananas are berries.",
            "https://provider/api/facts/1",
        ),
    ]));
    let server = test_app(common::create_test_state(provider));

    let created: Value = server.post("/facts").await.json();
    let alias = created["shortened_url"].as_str().unwrap().to_string();

    let response = server.get(&format!("/facts/{alias}")).await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(response.header("location"), "https://provider/api/facts/1");
}

#[tokio::test]
async fn test_redirect_increments_access_count() {
    let provider = Arc::new(common::ScriptedFactProvider::new(vec![
        common::upstream_fact("f1", "First fact.", "https://provider/api/facts/1"),
    ]));
    let state = common::create_test_state(provider);
    let server = test_app(state.clone());

    let created: Value = server.post("/facts").await.json();
    let alias = created["shortened_url"].as_str().unwrap().to_string();

    let before = state.fact_service.statistics();
    assert_eq!(before[0].access_count, 0);

    server.get(&format!("/facts/{alias}")).await;

    let after = state.fact_service.statistics();
    assert_eq!(after[0].alias, alias);
    assert_eq!(after[0].access_count, 1);
}

#[tokio::test]
async fn test_redirect_unknown_alias_is_not_found() {
    let provider = Arc::new(common::ScriptedFactProvider::new(vec![]));
    let server = test_app(common::create_test_state(provider));

    let response = server.get("/facts/zz").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}
