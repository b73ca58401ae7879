//! JWT claims, verification, and signing.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenKind, TokenPayload};
pub use decoder::JwtVerifier;
pub use encoder::JwtEncoder;
