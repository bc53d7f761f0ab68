mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _dir) = common::test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "Domain collector is running");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ping_matches_health() {
    let (server, _dir) = common::test_server();

    let response = server.get("/ping").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (server, _dir) = common::test_server();

    let json = server.get("/health").await.json::<Value>();

    assert!(json["uptime"].as_str().unwrap().starts_with("0:00:"));
    assert!(json["started_at"].as_str().is_some());
    assert!(json["stats"].get("total_received").is_some());
    assert!(json["stats"].get("unique_domains").is_some());
    assert!(json["stats"].get("requests").is_some());
}

#[tokio::test]
async fn test_health_counts_requests_and_items() {
    let (server, _dir) = common::test_server();

    server
        .post("/domains")
        .json(&json!({ "domains": ["alpha.io", "beta.io", "alpha.io", "bad"] }))
        .await
        .assert_status_ok();

    let json = server.get("/health").await.json::<Value>();

    assert_eq!(json["stats"]["total_received"], 4);
    assert_eq!(json["stats"]["unique_domains"], 2);
    assert_eq!(json["stats"]["requests"], 2);
}

#[tokio::test]
async fn test_health_reports_seeded_count() {
    let (server, _dir) = common::seeded_server(&["a-site.com", "b-site.com"]);

    let json = server.get("/health").await.json::<Value>();

    assert_eq!(json["stats"]["unique_domains"], 2);
    assert_eq!(json["stats"]["total_received"], 0);
}
