//! Credential verification contract.

use thiserror::Error;

use crate::jwt::Claims;

/// Why a credential could not be verified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Bad signature, malformed structure, or expired.
    #[error("invalid credential: {0}")]
    Invalid(String),
}

/// Validates a bearer credential and extracts its claims.
///
/// Implementations are pure apart from reading the clock for expiry.
pub trait CredentialVerifier: Send + Sync + std::fmt::Debug + 'static {
    /// Verify `credential` and return its claims.
    fn verify(&self, credential: &str) -> Result<Claims, VerificationError>;
}
