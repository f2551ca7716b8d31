mod common;

use linkmap::utils::key_codec;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success_returns_short_url() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "originalUrl": "https://example.com/very/long/path" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["succeeded"], true);
    assert_eq!(body["message"], serde_json::Value::Null);

    let key = key_codec::encode("https://example.com/very/long/path");
    assert_eq!(
        body["data"].as_str().unwrap(),
        format!("{}/{key}", common::BASE_URL)
    );
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let (server, repo) = common::create_test_server();
    let payload = json!({ "originalUrl": "https://example.com" });

    let first = server.post("/api/v1/shorten").json(&payload).await;
    let second = server.post("/api/v1/shorten").json(&payload).await;

    first.assert_status_ok();
    second.assert_status_ok();

    let first = first.json::<serde_json::Value>();
    let second = second.json::<serde_json::Value>();
    assert_eq!(first["data"], second["data"]);
    assert_eq!(repo.len(), 1, "resubmission must not create a second row");
}

#[tokio::test]
async fn test_shorten_empty_url_fails_in_band() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "originalUrl": "" }))
        .await;

    // Failures on this endpoint are in-band: HTTP 200, succeeded: false.
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["succeeded"], false);
    assert_eq!(body["message"], "The URL cannot be empty");
    assert_eq!(body["data"], serde_json::Value::Null);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_field_treated_as_empty() {
    let (server, _repo) = common::create_test_server();

    let response = server.post("/api/v1/shorten").json(&json!({})).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["succeeded"], false);
    assert_eq!(body["message"], "The URL cannot be empty");
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "originalUrl": "ftp://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["succeeded"], false);
    assert_eq!(body["message"], "Please enter the URL in the correct format");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_shorten_rejects_relative_url() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "originalUrl": "example.com/path" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["succeeded"], false);
    assert_eq!(body["message"], "Please enter the URL in the correct format");
}

#[tokio::test]
async fn test_shorten_collision_reports_failure_and_stores_nothing_new() {
    let (server, repo) = common::create_test_server();

    // Occupy the key that this URL hashes to with a different URL.
    let url = "https://example.com/colliding";
    let key = key_codec::encode(url);
    common::seed_mapping(&repo, &key, "https://other.example/occupant").await;

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "originalUrl": url }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["succeeded"], false);
    assert!(body["message"].is_string());
    assert_eq!(body["data"], serde_json::Value::Null);

    // The first mapping still owns the key.
    assert_eq!(repo.len(), 1);
}
