//! Bearer credential extraction from request headers.

use http::HeaderMap;
use http::header::AUTHORIZATION;

use super::rejection::Rejection;

/// Authentication scheme accepted by the gate.
const BEARER: &str = "bearer";

/// Pulls the bearer token out of the `Authorization` header.
///
/// Absent or blank → `MissingCredential`. Repeated headers, non-visible
/// bytes, or another scheme → `InvalidCredential`.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, Rejection> {
    let mut values = headers.get_all(AUTHORIZATION).iter();
    let value = values.next().ok_or(Rejection::MissingCredential)?;
    if values.next().is_some() {
        return Err(Rejection::InvalidCredential);
    }

    let value = value
        .to_str()
        .map_err(|_| Rejection::InvalidCredential)?
        .trim();
    if value.is_empty() {
        return Err(Rejection::MissingCredential);
    }

    let (scheme, token) = value.split_once(' ').unwrap_or((value, ""));
    if !scheme.eq_ignore_ascii_case(BEARER) {
        return Err(Rejection::InvalidCredential);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(Rejection::MissingCredential);
    }
    Ok(token)
}
