//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use assetgate_auth::{CacheRevocationStore, JwtEncoder, RevocationKey, RevocationStore, Role, TokenKind};
use assetgate_cache::CacheManager;
use assetgate_core::config::AppConfig;

/// Secret shared by the test encoder and the gate.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Signs tokens the gate will accept
    pub encoder: JwtEncoder,
    /// Writable handle on the revocation store behind the gate
    pub revocations: Option<CacheRevocationStore>,
}

impl TestApp {
    /// Test application backed by the in-memory revocation store
    pub async fn new() -> Self {
        let config = test_config();
        let cache = Arc::new(
            CacheManager::new(&config.cache)
                .await
                .expect("Failed to init cache"),
        );
        let store = CacheRevocationStore::new(cache, Duration::from_secs(60));

        let mut app = Self::with_store(config, Arc::new(store.clone()));
        app.revocations = Some(store);
        app
    }

    /// Test application with an arbitrary revocation store
    pub fn with_store(config: AppConfig, store: Arc<dyn RevocationStore>) -> Self {
        let encoder = JwtEncoder::new(&config.auth);
        let state = assetgate_api::build_state_with_store(config.clone(), store)
            .expect("Failed to build state");

        Self {
            router: assetgate_api::build_router(state),
            config,
            encoder,
            revocations: None,
        }
    }

    /// Sign an access token
    pub fn token(&self, subject: &str, session: &str, role: Option<Role>) -> String {
        self.encoder
            .issue(subject, session, role.as_ref(), TokenKind::Access)
            .expect("Failed to sign token")
    }

    /// Revoke an access session in the backing store
    pub async fn revoke(&self, subject: &str, session: &str) {
        self.revocations
            .as_ref()
            .expect("No writable revocation store")
            .revoke(&RevocationKey::new(TokenKind::Access, session, subject), None)
            .await
            .expect("Failed to revoke");
    }

    /// Lift an access session revocation
    pub async fn restore(&self, subject: &str, session: &str) -> bool {
        self.revocations
            .as_ref()
            .expect("No writable revocation store")
            .restore(&RevocationKey::new(TokenKind::Access, session, subject))
            .await
            .expect("Failed to restore")
    }

    /// GET `path` with a bearer token
    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        let headers = token
            .map(|t| vec![("authorization", format!("Bearer {t}"))])
            .unwrap_or_default();
        self.request(path, &headers).await
    }

    /// GET `path` with raw headers
    pub async fn request(&self, path: &str, headers: &[(&str, String)]) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);
        for (name, value) in headers {
            req = req.header(*name, value);
        }
        let req = req.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Configuration for tests: memory store, fixed secret, quiet defaults
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = TEST_SECRET.to_string();
    config.cache.provider = "memory".to_string();
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of a JSON error body
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}
