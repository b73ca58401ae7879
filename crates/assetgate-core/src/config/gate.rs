//! Authentication gate configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Settings for the per-request authentication gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Upper bound for a single revocation store lookup, in milliseconds.
    /// A lookup that takes longer is treated as a store failure.
    #[serde(default = "default_revocation_timeout")]
    pub revocation_timeout_ms: u64,
    /// `Retry-After` value sent when the revocation store is unavailable.
    #[serde(default = "default_retry_after")]
    pub retry_after_seconds: u64,
    /// Names of the identity headers injected into accepted requests.
    #[serde(default)]
    pub headers: IdentityHeaderConfig,
}

/// Header names the gate owns on accepted requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityHeaderConfig {
    /// Header carrying the authenticated subject identifier.
    #[serde(default = "default_subject_header")]
    pub subject: String,
    /// Header carrying the claimed role.
    #[serde(default = "default_role_header")]
    pub role: String,
    /// Header carrying the session identifier.
    #[serde(default = "default_session_header")]
    pub session: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            revocation_timeout_ms: default_revocation_timeout(),
            retry_after_seconds: default_retry_after(),
            headers: IdentityHeaderConfig::default(),
        }
    }
}

impl Default for IdentityHeaderConfig {
    fn default() -> Self {
        Self {
            subject: default_subject_header(),
            role: default_role_header(),
            session: default_session_header(),
        }
    }
}

impl GateConfig {
    /// Rejects a zero timeout and identity headers that collide.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.revocation_timeout_ms == 0 {
            return Err(AppError::configuration(
                "gate.revocation_timeout_ms must be greater than zero",
            ));
        }

        let names = [
            self.headers.subject.trim().to_ascii_lowercase(),
            self.headers.role.trim().to_ascii_lowercase(),
            self.headers.session.trim().to_ascii_lowercase(),
        ];
        if names.iter().any(|n| n.is_empty() || n == "authorization") {
            return Err(AppError::configuration(
                "gate.headers entries must be non-empty and must not be 'authorization'",
            ));
        }
        if names[0] == names[1] || names[0] == names[2] || names[1] == names[2] {
            return Err(AppError::configuration(
                "gate.headers entries must be distinct",
            ));
        }
        Ok(())
    }
}

fn default_revocation_timeout() -> u64 {
    250
}

fn default_retry_after() -> u64 {
    1
}

fn default_subject_header() -> String {
    "x-subject-id".to_string()
}

fn default_role_header() -> String {
    "x-user-role".to_string()
}

fn default_session_header() -> String {
    "x-session-id".to_string()
}
