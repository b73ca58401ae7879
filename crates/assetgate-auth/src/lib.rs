//! # assetgate-auth
//!
//! Request authentication for AssetGate.
//!
//! ## Modules
//!
//! - `jwt`: HS256 token verification and issuance
//! - `rbac`: Roles and per-route role requirements
//! - `revocation`: Session revocation lookups and writes
//! - `gate`: Per-request evaluation: credential, role, revocation, identity headers

pub mod gate;
pub mod jwt;
pub mod rbac;
pub mod revocation;
pub mod verifier;

pub use gate::{Admission, AuthGate, HeaderMutation, Identity, IdentityHeaders, Rejection};
pub use jwt::{Claims, JwtEncoder, JwtVerifier, TokenKind};
pub use rbac::{Role, RoleRequirement};
pub use revocation::{
    CacheRevocationStore, RevocationError, RevocationKey, RevocationStore, UnconfiguredRevocationStore,
};
pub use verifier::{CredentialVerifier, VerificationError};
