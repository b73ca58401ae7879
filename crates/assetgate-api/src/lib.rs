//! # assetgate-api
//!
//! HTTP boundary for AssetGate built on Axum.
//!
//! Runs the authentication gate as route middleware, maps gate rejections
//! and application errors to HTTP responses, and exposes the health and
//! identity endpoints.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, build_state_with_store};
pub use router::build_router;
pub use state::AppState;
