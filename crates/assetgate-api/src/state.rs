//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use assetgate_auth::AuthGate;
use assetgate_core::config::AppConfig;

/// Shared dependencies, passed to every handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Access-credential gate (owns the verifier and revocation store)
    pub gate: Arc<AuthGate>,
    /// When this process started serving
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates state around an already-built gate.
    pub fn new(config: AppConfig, gate: AuthGate) -> Self {
        Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
            started_at: Utc::now(),
        }
    }

    /// Seconds since the state was created.
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
