mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linklet::api::handlers::health_handler;

fn make_server(state: linklet::AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let (state, _repo, _cache) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["cache"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_with_caching_disabled_is_still_healthy() {
    // A deliberately disabled cache is not a degraded component.
    let (state, _repo) = common::create_test_state_without_cache();
    let server = make_server(state);

    let response = server.get("/health").await;
    response.assert_status_ok();
}
