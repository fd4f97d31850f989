//! # Payload Grammar
//!
//! The externally-presented form is `GK1:<token>`. Anything else is rejected
//! before the store is consulted.

use super::entities::{MIN_TOKEN_LEN, PAYLOAD_PREFIX};

/// Extract the token from a presented payload.
///
/// Returns `None` for a missing/foreign prefix or a token shorter than
/// [`MIN_TOKEN_LEN`]. Leading and trailing whitespace is ignored.
pub fn parse_payload(payload: &str) -> Option<&str> {
    let token = payload.trim().strip_prefix(PAYLOAD_PREFIX)?;
    if token.len() < MIN_TOKEN_LEN {
        return None;
    }
    Some(token)
}
