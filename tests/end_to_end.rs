//! Full request flow: create facts, follow an alias, read statistics.

mod common;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use axum_test::TestServer;
use fact_service::api::handlers::{create_fact_handler, redirect_handler, statistics_handler};
use fact_service::api::middleware::auth;
use serde_json::Value;

fn full_app(state: fact_service::state::AppState) -> TestServer {
    let admin = Router::new()
        .route("/admin/statistics", get(statistics_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .route("/facts", post(create_fact_handler))
        .route("/facts/{alias}", get(redirect_handler))
        .merge(admin)
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_redirect_and_statistics_flow() {
    let provider = Arc::new(common::ScriptedFactProvider::new(vec![
        common::upstream_fact(
            "f1",
            "Bananas are berries.",
            "https://provider/api/facts/1",
        ),
        common::upstream_fact("f2", "Honey never spoils.", "https://provider/api/facts/2"),
    ]));
    let server = full_app(common::create_test_state(provider));

    // First create: non-empty text and an alias.
    let first: Value = server.post("/facts").await.json();
    let first_alias = first["shortened_url"].as_str().unwrap().to_string();
    assert!(!first["original_fact"].as_str().unwrap().is_empty());
    assert!(!first_alias.is_empty());

    // Second create for a different upstream URL yields a different alias.
    let second: Value = server.post("/facts").await.json();
    let second_alias = second["shortened_url"].as_str().unwrap().to_string();
    assert_ne!(first_alias, second_alias);

    // Redirecting with the first alias returns the original URL.
    let redirect = server.get(&format!("/facts/{first_alias}")).await;
    assert_eq!(redirect.status_code(), 308);
    assert_eq!(redirect.header("location"), "https://provider/api/facts/1");

    // Statistics list the first alias with count 1, the second with 0.
    let response = server
        .get("/admin/statistics")
        .add_header(
            "Authorization",
            common::basic_auth_header(common::TEST_ADMIN_USERNAME, common::TEST_ADMIN_PASSWORD),
        )
        .await;
    response.assert_status_ok();

    let stats: Vec<Value> = response.json::<Value>().as_array().unwrap().clone();
    assert_eq!(stats.len(), 2);

    let count_for = |alias: &str| {
        stats
            .iter()
            .find(|s| s["shortened_url"] == alias)
            .map(|s| s["access_count"].as_u64().unwrap())
            .unwrap()
    };
    assert_eq!(count_for(&first_alias), 1);
    assert_eq!(count_for(&second_alias), 0);
}
