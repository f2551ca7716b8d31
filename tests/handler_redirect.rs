mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_redirect_known_key_is_permanent() {
    let (server, repo) = common::create_test_server();
    common::seed_mapping(&repo, "ab12", "https://example.com/very/long/path").await;

    let response = server.get("/ab12").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location"),
        "https://example.com/very/long/path"
    );
}

#[tokio::test]
async fn test_redirect_unknown_key_is_404_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/zz99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("NotFound");
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let (server, _repo) = common::create_test_server();
    let original = "https://example.com/very/long/path?q=1";

    let shorten = server
        .post("/api/v1/shorten")
        .json(&json!({ "originalUrl": original }))
        .await;
    shorten.assert_status_ok();

    let body = shorten.json::<serde_json::Value>();
    let short_url = body["data"].as_str().unwrap();
    let key = short_url.rsplit('/').next().unwrap();

    let redirect = server.get(&format!("/{key}")).await;
    redirect.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(redirect.header("location"), original);
}

#[tokio::test]
async fn test_miss_then_create_is_visible_immediately() {
    let (server, _repo) = common::create_test_server();
    let original = "https://example.com/created/later";
    let key = linkmap::utils::key_codec::encode(original);

    // Resolve before the mapping exists; the negative result must not stick
    // in the cache.
    let miss = server.get(&format!("/{key}")).await;
    miss.assert_status(StatusCode::NOT_FOUND);

    server
        .post("/api/v1/shorten")
        .json(&json!({ "originalUrl": original }))
        .await
        .assert_status_ok();

    let hit = server.get(&format!("/{key}")).await;
    hit.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(hit.header("location"), original);
}

#[tokio::test]
async fn test_repeated_redirects_serve_from_cache() {
    let (server, repo) = common::create_test_server();
    common::seed_mapping(&repo, "ab12", "https://example.com").await;

    for _ in 0..3 {
        let response = server.get("/ab12").await;
        response.assert_status(StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.header("location"), "https://example.com");
    }
}

#[tokio::test]
async fn test_healthz() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "ok");
}
