//! JWT claims: the wire payload and the verified claims derived from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::rbac::Role;

/// Distinguishes access tokens from refresh tokens.
///
/// Each kind has its own revocation namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived access token for API requests.
    #[default]
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl TokenKind {
    /// Lowercase name, as used in the `token_type` claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload as it appears inside a signed token.
///
/// Identity fields are optional; identifiers may be strings or numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject: the principal's identifier.
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Token/session identifier.
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Claimed role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Access or refresh. Absent means access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenKind>,
    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Claims of a verified credential. Rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    /// Stable identifier of the principal. Empty when the token has none.
    pub subject_id: String,
    /// Identifier of this issued token. Empty when the token has none.
    pub session_id: String,
    /// Claimed role, if any.
    pub role: Option<Role>,
    /// Which kind of credential this is.
    pub kind: TokenKind,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

impl From<TokenPayload> for Claims {
    fn from(payload: TokenPayload) -> Self {
        Self {
            subject_id: payload.sub.unwrap_or_default(),
            session_id: payload.jti.unwrap_or_default(),
            role: payload
                .role
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(Role::parse),
            kind: payload.token_type.unwrap_or_default(),
            exp: payload.exp,
        }
    }
}

/// Accepts `"42"`, `42`, or `null` for identifier claims.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_empty() {
        let payload: TokenPayload = serde_json::from_str(r#"{"exp": 10}"#).unwrap();
        let claims = Claims::from(payload);
        assert_eq!(claims.subject_id, "");
        assert_eq!(claims.session_id, "");
        assert_eq!(claims.role, None);
        assert_eq!(claims.kind, TokenKind::Access);
    }

    #[test]
    fn test_numeric_identifiers_are_accepted() {
        let payload: TokenPayload =
            serde_json::from_str(r#"{"sub": 42, "jti": "abc", "role": "staff", "exp": 10}"#)
                .unwrap();
        let claims = Claims::from(payload);
        assert_eq!(claims.subject_id, "42");
        assert_eq!(claims.session_id, "abc");
        assert_eq!(claims.role, Some(Role::Staff));
    }

    #[test]
    fn test_blank_role_counts_as_missing() {
        let payload: TokenPayload =
            serde_json::from_str(r#"{"role": "  ", "exp": 10}"#).unwrap();
        assert_eq!(Claims::from(payload).role, None);
    }

    #[test]
    fn test_refresh_kind_is_parsed() {
        let payload: TokenPayload =
            serde_json::from_str(r#"{"token_type": "refresh", "exp": 10}"#).unwrap();
        assert_eq!(Claims::from(payload).kind, TokenKind::Refresh);
    }
}
