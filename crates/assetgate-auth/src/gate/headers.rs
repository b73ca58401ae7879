//! Identity headers the gate owns, and the mutation applied on acceptance.

use http::header::InvalidHeaderValue;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use assetgate_core::config::IdentityHeaderConfig;
use assetgate_core::error::AppError;

use crate::jwt::Claims;
use crate::rbac::Role;

/// Names of the three identity headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityHeaders {
    /// Subject identifier header.
    pub subject: HeaderName,
    /// Role header.
    pub role: HeaderName,
    /// Session identifier header.
    pub session: HeaderName,
}

impl IdentityHeaders {
    /// Parses configured header names.
    pub fn from_config(config: &IdentityHeaderConfig) -> Result<Self, AppError> {
        let parse = |name: &str| {
            HeaderName::from_bytes(name.trim().to_ascii_lowercase().as_bytes()).map_err(|e| {
                AppError::configuration(format!("Invalid identity header name '{name}': {e}"))
            })
        };

        Ok(Self {
            subject: parse(&config.subject)?,
            role: parse(&config.role)?,
            session: parse(&config.session)?,
        })
    }

    /// All three names, in subject/role/session order.
    pub fn names(&self) -> [&HeaderName; 3] {
        [&self.subject, &self.role, &self.session]
    }

    /// Renders header values for `identity`.
    ///
    /// Values are written as raw UTF-8 bytes; control characters are rejected.
    pub fn render(&self, identity: &Identity) -> Result<Vec<(HeaderName, HeaderValue)>, InvalidHeaderValue> {
        let role = identity.role.as_ref().map(Role::as_str).unwrap_or_default();
        Ok(vec![
            (self.subject.clone(), HeaderValue::from_bytes(identity.subject_id.as_bytes())?),
            (self.role.clone(), HeaderValue::from_bytes(role.as_bytes())?),
            (self.session.clone(), HeaderValue::from_bytes(identity.session_id.as_bytes())?),
        ])
    }

    /// Reads an identity back from headers written by [`HeaderMutation::apply`].
    ///
    /// Returns `None` unless exactly one UTF-8 value is present for each header.
    pub fn read(&self, headers: &HeaderMap) -> Option<Identity> {
        let single = |name: &HeaderName| {
            let mut values = headers.get_all(name).iter();
            let value = values.next()?;
            if values.next().is_some() {
                return None;
            }
            std::str::from_utf8(value.as_bytes()).ok().map(str::to_string)
        };

        let role = single(&self.role)?;
        Some(Identity {
            subject_id: single(&self.subject)?,
            role: (!role.is_empty()).then(|| Role::parse(&role)),
            session_id: single(&self.session)?,
        })
    }
}

impl Default for IdentityHeaders {
    fn default() -> Self {
        Self {
            subject: HeaderName::from_static("x-subject-id"),
            role: HeaderName::from_static("x-user-role"),
            session: HeaderName::from_static("x-session-id"),
        }
    }
}

/// Identity derived from verified claims, forwarded to downstream handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Authenticated subject.
    pub subject_id: String,
    /// Session the credential belongs to.
    pub session_id: String,
    /// Claimed role, if any.
    pub role: Option<Role>,
}

impl From<&Claims> for Identity {
    fn from(claims: &Claims) -> Self {
        Self {
            subject_id: claims.subject_id.clone(),
            session_id: claims.session_id.clone(),
            role: claims.role.clone(),
        }
    }
}

/// Header edits to apply to an accepted request.
///
/// Removals run first, so client-supplied copies never survive next to the
/// injected values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMutation {
    /// Headers to strip.
    pub remove: Vec<HeaderName>,
    /// Headers to insert after stripping.
    pub insert: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderMutation {
    /// Applies the edits to `headers`.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for name in &self.remove {
            headers.remove(name);
        }
        for (name, value) in &self.insert {
            headers.insert(name.clone(), value.clone());
        }
    }
}
