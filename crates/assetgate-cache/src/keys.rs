//! Cache key builders for revocation entries.
//!
//! Centralising key construction keeps the gate (reader) and the operator
//! tooling (writer) agreeing on the exact key layout. The backend-level
//! prefix (`cache.redis.key_prefix`) is applied by the Redis provider.
//!
//! The session id is length-prefixed so that ids containing `:` cannot
//! produce the same key for different (session, subject) pairs.

/// Namespace for revoked access-token sessions.
const REVOKED_ACCESS: &str = "revoked:access";

/// Namespace for revoked refresh-token sessions.
const REVOKED_REFRESH: &str = "revoked:refresh";

/// Revocation key for an access-token session of a subject.
pub fn revoked_access(session_id: &str, subject_id: &str) -> String {
    revocation_key(REVOKED_ACCESS, session_id, subject_id)
}

/// Revocation key for a refresh-token session of a subject.
pub fn revoked_refresh(session_id: &str, subject_id: &str) -> String {
    revocation_key(REVOKED_REFRESH, session_id, subject_id)
}

/// `{namespace}:{len(session)}:{session}:{subject}`, length in bytes.
fn revocation_key(namespace: &str, session_id: &str, subject_id: &str) -> String {
    format!("{namespace}:{}:{session_id}:{subject_id}", session_id.len())
}
