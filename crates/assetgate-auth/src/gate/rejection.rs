//! Reasons the gate denies a request.

use thiserror::Error;

use assetgate_core::error::AppError;

/// Outcome of a denied gate evaluation. Exactly one per rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// No credential was presented.
    #[error("missing bearer credential")]
    MissingCredential,
    /// The credential is malformed, badly signed, expired, or of the wrong kind.
    #[error("invalid bearer credential")]
    InvalidCredential,
    /// The credential is valid but its role is not allowed here.
    #[error("insufficient role for this operation")]
    Forbidden,
    /// The session was explicitly revoked.
    #[error("session has been revoked")]
    SessionRevoked,
    /// The revocation store could not be consulted.
    #[error("revocation check unavailable")]
    RevocationCheckUnavailable,
}

impl Rejection {
    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MISSING_CREDENTIAL",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::Forbidden => "FORBIDDEN",
            Self::SessionRevoked => "SESSION_REVOKED",
            Self::RevocationCheckUnavailable => "REVOCATION_CHECK_UNAVAILABLE",
        }
    }

    /// Whether the client may retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RevocationCheckUnavailable)
    }

    /// Whether the client has to obtain a fresh credential.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential | Self::InvalidCredential | Self::SessionRevoked
        )
    }
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        let message = rejection.to_string();
        match rejection {
            Rejection::MissingCredential
            | Rejection::InvalidCredential
            | Rejection::SessionRevoked => AppError::authentication(message),
            Rejection::Forbidden => AppError::authorization(message),
            Rejection::RevocationCheckUnavailable => AppError::service_unavailable(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetgate_core::error::ErrorKind;

    #[test]
    fn test_only_store_failure_is_retryable() {
        assert!(Rejection::RevocationCheckUnavailable.is_retryable());
        assert!(!Rejection::Forbidden.is_retryable());
        assert!(!Rejection::InvalidCredential.is_retryable());
    }

    #[test]
    fn test_app_error_kinds() {
        assert_eq!(
            AppError::from(Rejection::SessionRevoked).kind,
            ErrorKind::Authentication
        );
        assert_eq!(AppError::from(Rejection::Forbidden).kind, ErrorKind::Authorization);
        assert_eq!(
            AppError::from(Rejection::RevocationCheckUnavailable).kind,
            ErrorKind::ServiceUnavailable
        );
    }
}
