//! Integration tests for session revocation at the HTTP boundary.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use http::header::{RETRY_AFTER, WWW_AUTHENTICATE};

use assetgate_auth::{
    RevocationError, RevocationKey, RevocationStore, Role, UnconfiguredRevocationStore,
};

#[derive(Debug)]
struct HangingStore;

#[async_trait]
impl RevocationStore for HangingStore {
    async fn exists(&self, _key: &RevocationKey) -> Result<bool, RevocationError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(false)
    }

    async fn health_check(&self) -> Result<bool, RevocationError> {
        Ok(true)
    }
}

#[tokio::test]
async fn test_revoked_admin_session_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    let token = app.token("admin-1", "sess-1", Some(Role::Admin));
    app.revoke("admin-1", "sess-1").await;

    let response = app.get("/api/admin/overview", Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("SESSION_REVOKED"));
    assert!(response.headers.contains_key(WWW_AUTHENTICATE));
}

#[tokio::test]
async fn test_revocation_only_affects_that_session() {
    let app = helpers::TestApp::new().await;
    let revoked = app.token("u1", "sess-old", Some(Role::Staff));
    let current = app.token("u1", "sess-new", Some(Role::Staff));
    app.revoke("u1", "sess-old").await;

    assert_eq!(app.get("/api/me", Some(&revoked)).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.get("/api/me", Some(&current)).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_separator_in_ids_does_not_spread_revocation() {
    let app = helpers::TestApp::new().await;
    let revoked = app.token("b:c", "a", Some(Role::Staff));
    let bystander = app.token("c", "a:b", Some(Role::Staff));
    app.revoke("b:c", "a").await;

    assert_eq!(app.get("/api/me", Some(&revoked)).await.status, StatusCode::UNAUTHORIZED);

    let response = app.get("/api/me", Some(&bystander)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["subject_id"], "c");
    assert_eq!(response.body["session_id"], "a:b");
}

#[tokio::test]
async fn test_restored_session_is_admitted_again() {
    let app = helpers::TestApp::new().await;
    let token = app.token("u1", "s1", Some(Role::Staff));
    app.revoke("u1", "s1").await;
    assert_eq!(app.get("/api/me", Some(&token)).await.status, StatusCode::UNAUTHORIZED);

    assert!(app.restore("u1", "s1").await);

    assert_eq!(app.get("/api/me", Some(&token)).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unconfigured_store_fails_closed() {
    let app = helpers::TestApp::with_store(
        helpers::test_config(),
        Arc::new(UnconfiguredRevocationStore),
    );
    let token = app.token("u1", "s1", Some(Role::Admin));

    let response = app.get("/api/me", Some(&token)).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.error_code(), Some("REVOCATION_CHECK_UNAVAILABLE"));
    assert_eq!(response.headers[RETRY_AFTER], "1");
}

#[tokio::test(start_paused = true)]
async fn test_store_timeout_fails_closed() {
    let mut config = helpers::test_config();
    config.gate.retry_after_seconds = 5;
    let app = helpers::TestApp::with_store(config, Arc::new(HangingStore));
    let token = app.token("admin-1", "sess-1", Some(Role::Admin));

    let response = app.get("/api/admin/overview", Some(&token)).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.error_code(), Some("REVOCATION_CHECK_UNAVAILABLE"));
    assert_eq!(response.headers[RETRY_AFTER], "5");
}

#[tokio::test]
async fn test_forbidden_takes_precedence_over_store_failure() {
    let app = helpers::TestApp::with_store(
        helpers::test_config(),
        Arc::new(UnconfiguredRevocationStore),
    );
    let token = app.token("u1", "s1", Some(Role::Staff));

    let response = app.get("/api/admin/overview", Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
