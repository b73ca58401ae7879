//! Health check handler.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use assetgate_auth::RevocationError;

use crate::state::AppState;

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when authenticated requests can be admitted, else `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Revocation store reachability: `ok`, `degraded`, or `unconfigured`.
    pub revocation_store: String,
    /// Seconds since startup.
    pub uptime_seconds: i64,
}

/// GET /api/health
///
/// Unauthenticated. Answers 503 whenever the gate would fail closed.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let timeout = Duration::from_millis(state.config.gate.revocation_timeout_ms);
    let probe = tokio::time::timeout(timeout, state.gate.store().health_check())
        .await
        .unwrap_or(Err(RevocationError::Timeout(timeout)));

    let store_status = match probe {
        Ok(true) => "ok",
        Err(RevocationError::Unconfigured) => "unconfigured",
        Ok(false) | Err(_) => "degraded",
    };

    let (status, overall) = if store_status == "ok" {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(revocation_store = store_status, "Health check degraded");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(HealthResponse {
            status: overall.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            revocation_store: store_status.to_string(),
            uptime_seconds: state.uptime_seconds(),
        }),
    )
}
