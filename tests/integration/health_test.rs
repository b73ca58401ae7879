//! Integration tests for the health endpoint.

mod helpers;

use std::sync::Arc;

use http::StatusCode;

use assetgate_auth::UnconfiguredRevocationStore;

#[tokio::test]
async fn test_health_ok_with_memory_store() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["revocation_store"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_health_needs_no_credential() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("/api/health", &[("authorization", "Bearer garbage".to_string())])
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_unconfigured_store() {
    let app = helpers::TestApp::with_store(
        helpers::test_config(),
        Arc::new(UnconfiguredRevocationStore),
    );

    let response = app.get("/api/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["revocation_store"], "unconfigured");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/nope", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
