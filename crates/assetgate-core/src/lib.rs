//! # assetgate-core
//!
//! Core crate for AssetGate. Contains configuration schemas, the unified
//! error system, and the cache provider trait shared by the revocation
//! store implementations.
//!
//! This crate has **no** internal dependencies on other AssetGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
