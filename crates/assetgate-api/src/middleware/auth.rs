//! Gate middleware: admits or rejects each request before it reaches a handler.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use assetgate_auth::{AuthGate, RoleRequirement};

use crate::error::GateRejection;
use crate::state::AppState;

/// Gate plus the role requirement of the routes it protects.
///
/// Build one per route group and pass it to
/// `axum::middleware::from_fn_with_state` together with [`authenticate`].
#[derive(Debug, Clone)]
pub struct RouteGuard {
    gate: Arc<AuthGate>,
    required: Arc<RoleRequirement>,
    retry_after_seconds: u64,
}

impl RouteGuard {
    /// Guard requiring `required` using the gate in `state`.
    pub fn new(state: &AppState, required: RoleRequirement) -> Self {
        Self {
            gate: Arc::clone(&state.gate),
            required: Arc::new(required),
            retry_after_seconds: state.config.gate.retry_after_seconds,
        }
    }
}

/// Evaluates the gate. On admission the identity headers are rewritten and
/// the identity is stored in request extensions; on rejection the request is
/// answered here and never forwarded.
pub async fn authenticate(
    State(guard): State<RouteGuard>,
    mut request: Request,
    next: Next,
) -> Response {
    match guard.gate.evaluate(request.headers(), &guard.required).await {
        Ok(admission) => {
            admission.mutation.apply(request.headers_mut());
            request.extensions_mut().insert(admission.identity);
            next.run(request).await
        }
        Err(rejection) => GateRejection::new(rejection, guard.retry_after_seconds).into_response(),
    }
}
