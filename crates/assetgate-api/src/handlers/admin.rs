//! Admin-only handlers.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// Body of `GET /api/admin/overview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    /// Subject that made the request.
    pub requested_by: String,
    /// Credential kind the gate accepts.
    pub token_kind: String,
    /// Configured revocation backend.
    pub revocation_provider: String,
    /// Bound on a single revocation lookup.
    pub revocation_timeout_ms: u64,
    /// Header names carrying subject, role, and session downstream.
    pub identity_headers: Vec<String>,
    /// Seconds since startup.
    pub uptime_seconds: i64,
}

/// GET /api/admin/overview
pub async fn overview(
    State(state): State<AppState>,
    caller: CurrentIdentity,
) -> Json<OverviewResponse> {
    Json(OverviewResponse {
        requested_by: caller.subject_id.clone(),
        token_kind: state.gate.token_kind().to_string(),
        revocation_provider: state.config.cache.provider.clone(),
        revocation_timeout_ms: state.config.gate.revocation_timeout_ms,
        identity_headers: state
            .gate
            .identity_headers()
            .names()
            .iter()
            .map(|name| name.as_str().to_string())
            .collect(),
        uptime_seconds: state.uptime_seconds(),
    })
}
