//! JWT signing with the same key material the verifier uses.
//!
//! AssetGate does not issue credentials to clients; this encoder exists for
//! operator tooling and for exercising the gate with real signed tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use assetgate_core::config::AuthConfig;
use assetgate_core::error::AppError;

use super::claims::{TokenKind, TokenPayload};
use crate::rbac::Role;

/// Upper bound for token lifetimes (one year).
const MAX_TTL_HOURS: u64 = 24 * 365;

/// Creates HS256-signed JWTs.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Issuer stamped into tokens, if configured.
    issuer: Option<String>,
    /// Audience stamped into tokens, if configured.
    audience: Option<String>,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in hours.
    refresh_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_ttl_minutes: clamp_ttl(config.access_ttl_minutes, MAX_TTL_HOURS * 60),
            refresh_ttl_hours: clamp_ttl(config.refresh_ttl_hours, MAX_TTL_HOURS),
        }
    }

    /// Signs a token for the given subject and session with the TTL of `kind`.
    pub fn issue(
        &self,
        subject_id: &str,
        session_id: &str,
        role: Option<&Role>,
        kind: TokenKind,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let ttl = match kind {
            TokenKind::Access => Duration::minutes(self.access_ttl_minutes),
            TokenKind::Refresh => Duration::hours(self.refresh_ttl_hours),
        };

        let payload = TokenPayload {
            sub: Some(subject_id.to_string()),
            jti: Some(session_id.to_string()),
            role: role.map(|r| r.as_str().to_string()),
            token_type: Some(kind),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: Some(now.timestamp()),
            exp: (now + ttl).timestamp(),
        };

        self.sign(&payload)
    }

    /// Signs an arbitrary payload as-is.
    pub fn sign(&self, payload: &TokenPayload) -> Result<String, AppError> {
        encode(&Header::default(), payload, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}

fn clamp_ttl(value: u64, max: u64) -> i64 {
    i64::try_from(value.min(max)).unwrap_or(0)
}
