mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use linklet::api::handlers::{
    redirect_handler, stats_handler, stats_list_handler, stats_reset_handler,
};
use serde_json::json;

fn make_server(state: linklet::AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/api/v1/stats", get(stats_list_handler))
        .route("/api/v1/stats/{code}", get(stats_handler))
        .route("/api/v1/stats/reset", post(stats_reset_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_clicks_accumulate_across_redirects() {
    let (state, repo, _cache) = common::create_test_state();
    repo.seed("ABC123", "https://example.com/a");

    let server = make_server(state);

    for _ in 0..3 {
        let response = server.get("/ABC123").await;
        assert_eq!(response.status_code(), 307);
    }

    let response = server.get("/api/v1/stats/ABC123").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_code"], "ABC123");
    assert_eq!(body["clicks"], 3);
}

#[tokio::test]
async fn test_cache_hit_redirects_still_count_clicks() {
    let (state, repo, _cache) = common::create_test_state();
    repo.seed("ABC123", "https://example.com/a");

    let server = make_server(state);

    // Two redirects: a miss then a hit. The durable counter sees only the
    // miss, but analytics sees both.
    server.get("/ABC123").await;
    server.get("/ABC123").await;

    assert_eq!(repo.fetch_count("ABC123"), Some(1));

    let response = server.get("/api/v1/stats/ABC123").await;
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 2);
}

#[tokio::test]
async fn test_stats_unknown_code_is_zero() {
    let (state, _repo, _cache) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/api/v1/stats/ZZZZZZ").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 0);
}

#[tokio::test]
async fn test_stats_list_returns_all_codes() {
    let (state, repo, _cache) = common::create_test_state();
    repo.seed("aaa111", "https://example.com/a");
    repo.seed("bbb222", "https://example.com/b");

    let server = make_server(state);

    server.get("/aaa111").await;
    server.get("/bbb222").await;
    server.get("/bbb222").await;

    let response = server.get("/api/v1/stats").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["clicks"]["aaa111"], 1);
    assert_eq!(body["clicks"]["bbb222"], 2);
}

#[tokio::test]
async fn test_reset_clears_counters() {
    let (state, repo, _cache) = common::create_test_state();
    repo.seed("ABC123", "https://example.com/a");

    let server = make_server(state);

    for _ in 0..3 {
        server.get("/ABC123").await;
    }

    let response = server
        .post("/api/v1/stats/reset")
        .json(&json!({ "short_codes": ["ABC123"] }))
        .await;
    assert_eq!(response.status_code(), 204);

    let response = server.get("/api/v1/stats/ABC123").await;
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 0);
}

#[tokio::test]
async fn test_stats_fail_open_without_cache_backend() {
    let (state, repo) = common::create_test_state_without_cache();
    repo.seed("ABC123", "https://example.com/a");

    let server = make_server(state);

    // Redirects succeed but nothing is counted.
    let response = server.get("/ABC123").await;
    assert_eq!(response.status_code(), 307);

    let response = server.get("/api/v1/stats/ABC123").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 0);

    let response = server.get("/api/v1/stats").await;
    response.assert_status_ok();
    assert!(
        response.json::<serde_json::Value>()["clicks"]
            .as_object()
            .unwrap()
            .is_empty()
    );
}
