//! JWT verification for HS256 bearer credentials.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use assetgate_core::config::AuthConfig;

use super::claims::{Claims, TokenPayload};
use crate::verifier::{CredentialVerifier, VerificationError};

/// Verifies HS256-signed JWTs against the configured secret.
#[derive(Clone)]
pub struct JwtVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        let mut required = vec!["exp"];
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        match &config.audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        validation.set_required_spec_claims(&required);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

impl CredentialVerifier for JwtVerifier {
    fn verify(&self, credential: &str) -> Result<Claims, VerificationError> {
        let token_data = decode::<TokenPayload>(credential, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    JwtErrorKind::ExpiredSignature => "token has expired".to_string(),
                    JwtErrorKind::InvalidToken => "invalid token format".to_string(),
                    JwtErrorKind::InvalidSignature => "invalid token signature".to_string(),
                    JwtErrorKind::InvalidAlgorithm => "unexpected signing algorithm".to_string(),
                    JwtErrorKind::InvalidIssuer => "unexpected issuer".to_string(),
                    JwtErrorKind::InvalidAudience => "unexpected audience".to_string(),
                    JwtErrorKind::MissingRequiredClaim(claim) => {
                        format!("missing required claim '{claim}'")
                    }
                    _ => format!("token validation failed: {e}"),
                };
                VerificationError::Invalid(reason)
            })?;

        Ok(Claims::from(token_data.claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::claims::TokenKind;
    use crate::jwt::encoder::JwtEncoder;
    use crate::rbac::Role;
    use chrono::Utc;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip_claims() {
        let cfg = config("secret-a");
        let token = JwtEncoder::new(&cfg)
            .issue("user-1", "sess-1", Some(&Role::Admin), TokenKind::Access)
            .unwrap();

        let claims = JwtVerifier::new(&cfg).verify(&token).unwrap();
        assert_eq!(claims.subject_id, "user-1");
        assert_eq!(claims.session_id, "sess-1");
        assert_eq!(claims.role, Some(Role::Admin));
        assert_eq!(claims.kind, TokenKind::Access);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = JwtEncoder::new(&config("secret-a"))
            .issue("user-1", "sess-1", None, TokenKind::Access)
            .unwrap();

        let err = JwtVerifier::new(&config("secret-b"))
            .verify(&token)
            .unwrap_err();
        assert_eq!(
            err,
            VerificationError::Invalid("invalid token signature".to_string())
        );
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let cfg = config("secret-a");
        let payload = TokenPayload {
            sub: Some("user-1".to_string()),
            jti: Some("sess-1".to_string()),
            exp: Utc::now().timestamp() - 3600,
            ..TokenPayload::default()
        };
        let token = JwtEncoder::new(&cfg).sign(&payload).unwrap();

        let err = JwtVerifier::new(&cfg).verify(&token).unwrap_err();
        assert_eq!(err, VerificationError::Invalid("token has expired".to_string()));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let verifier = JwtVerifier::new(&config("secret-a"));
        assert!(verifier.verify("not-a-jwt").is_err());
        assert!(verifier.verify("a.b.c").is_err());
    }

    #[test]
    fn test_issuer_is_enforced_when_configured() {
        let mut cfg = config("secret-a");
        cfg.issuer = Some("assetgate".to_string());
        let token = JwtEncoder::new(&config("secret-a"))
            .issue("user-1", "sess-1", None, TokenKind::Access)
            .unwrap();

        assert!(JwtVerifier::new(&cfg).verify(&token).is_err());
        let issued = JwtEncoder::new(&cfg)
            .issue("user-1", "sess-1", None, TokenKind::Access)
            .unwrap();
        assert!(JwtVerifier::new(&cfg).verify(&issued).is_ok());
    }
}
