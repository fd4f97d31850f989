//! # Test Support
//!
//! Builds assertions the way the platform does, so tests can exercise the
//! verifier against genuinely signed (and then tampered) inputs.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Percent-encode a component the way `application/x-www-form-urlencoded`
/// expects. Spaces become `%20` (not `+`) to keep the encoder trivial.
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Sign `pairs` with `secret` exactly like the platform: sorted `key=value`
/// lines joined by `\n`, keyed through the `WebAppData` domain separator.
/// Returns the full encoded assertion blob including the `hash` field.
pub fn sign_init_data(pairs: &[(&str, &str)], secret: &[u8]) -> String {
    let mut sorted: Vec<(&str, &str)> = pairs.to_vec();
    sorted.sort_by_key(|(k, _)| *k);
    let check_string = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut outer =
        HmacSha256::new_from_slice(b"WebAppData").expect("HMAC can take key of any size");
    outer.update(secret);
    let derived_key = outer.finalize().into_bytes();

    let mut mac =
        HmacSha256::new_from_slice(&derived_key).expect("HMAC can take key of any size");
    mac.update(check_string.as_bytes());
    let hash = hex::encode(mac.finalize().into_bytes());

    let mut encoded: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect();
    encoded.push(format!("hash={hash}"));
    encoded.join("&")
}
