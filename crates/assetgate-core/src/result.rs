//! Convenience result type alias for AssetGate.

use crate::error::AppError;

/// A specialized `Result` type for AssetGate operations.
pub type AppResult<T> = Result<T, AppError>;
