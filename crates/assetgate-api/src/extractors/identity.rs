//! `CurrentIdentity` extractor: the identity the gate admitted.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use assetgate_auth::Identity;
use assetgate_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity of the caller, as admitted by the gate.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl std::ops::Deref for CurrentIdentity {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    /// Prefers the identity stored by the gate middleware; falls back to the
    /// identity headers for requests authenticated by an upstream gate.
    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(CurrentIdentity(identity.clone()));
        }

        state
            .gate
            .identity_headers()
            .read(&parts.headers)
            .map(CurrentIdentity)
            .ok_or_else(|| AppError::authentication("No authenticated identity on request").into())
    }
}
