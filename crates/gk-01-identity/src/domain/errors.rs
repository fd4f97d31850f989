//! # Authentication Errors

use thiserror::Error;

/// Errors produced while verifying a platform-signed identity assertion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The assertion carries no `hash` field at all.
    #[error("assertion has no hash field")]
    NoHash,

    /// The received hash is not the length of a hex-encoded HMAC-SHA256.
    ///
    /// Rejected before any content comparison so a forger learns nothing
    /// about the expected value from a wrong-length probe.
    #[error("hash length mismatch: expected {expected} hex chars, got {got}")]
    HashLengthMismatch { expected: usize, got: usize },

    /// The hash does not match the signature computed over the check-string.
    #[error("assertion signature mismatch")]
    BadSignature,

    /// The assertion's `auth_date` is outside the configured freshness window.
    #[error("assertion is older than the configured freshness window")]
    Stale,

    /// The `user` field is missing or does not decode to a usable identity.
    #[error("assertion has no usable user field")]
    NoUser,
}

impl AuthError {
    /// Stable machine-readable code for the wire envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NoHash => "NO_HASH",
            AuthError::HashLengthMismatch { .. } => "HASH_LENGTH_MISMATCH",
            AuthError::BadSignature => "BAD_SIGNATURE",
            AuthError::Stale => "STALE_INIT_DATA",
            AuthError::NoUser => "NO_USER",
        }
    }
}
