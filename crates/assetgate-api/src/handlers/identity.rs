//! Caller identity handler.

use axum::Json;

use assetgate_auth::Identity;

use crate::extractors::CurrentIdentity;

/// GET /api/me
pub async fn me(CurrentIdentity(identity): CurrentIdentity) -> Json<Identity> {
    Json(identity)
}
