//! # Signature Verification
//!
//! Recomputes the platform's HMAC-SHA256 over the canonical check-string and
//! compares it to the `hash` field in constant time.

use super::errors::AuthError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

/// Domain-separation string the platform keys the derived secret with.
pub const DOMAIN_SEPARATOR: &[u8] = b"WebAppData";

/// A hex-encoded HMAC-SHA256 is always 64 characters.
pub const HASH_HEX_LEN: usize = 64;

/// Canonical check-string: every field except `hash`, keys in lexicographic
/// order, `key=value` lines joined with `\n`.
pub fn check_string(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .filter(|(k, _)| k.as_str() != "hash")
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Verify the `hash` field of a parsed assertion against the shared secret.
///
/// The derived key is `HMAC_SHA256(key = "WebAppData", msg = secret)`; the
/// expected signature is `HMAC_SHA256(key = derived, msg = check_string)`.
///
/// # Security
///
/// - A wrong-length hash is rejected before any content comparison, with a
///   distinct failure reason.
/// - Equal-length content comparison goes through `Mac::verify_slice`, which
///   is constant-time, so a mismatch leaks nothing about its position.
pub fn verify_fields(fields: &BTreeMap<String, String>, secret: &[u8]) -> Result<(), AuthError> {
    let received = fields.get("hash").ok_or(AuthError::NoHash)?;
    if received.len() != HASH_HEX_LEN {
        return Err(AuthError::HashLengthMismatch {
            expected: HASH_HEX_LEN,
            got: received.len(),
        });
    }
    // A right-length but non-hex hash can never match any signature.
    let received_bytes = hex::decode(received).map_err(|_| AuthError::BadSignature)?;

    let mut outer =
        HmacSha256::new_from_slice(DOMAIN_SEPARATOR).map_err(|_| AuthError::BadSignature)?;
    outer.update(secret);
    let derived_key = outer.finalize().into_bytes();

    let mut mac =
        HmacSha256::new_from_slice(&derived_key).map_err(|_| AuthError::BadSignature)?;
    mac.update(check_string(fields).as_bytes());

    // Constant-time comparison
    mac.verify_slice(&received_bytes)
        .map_err(|_| AuthError::BadSignature)
}
