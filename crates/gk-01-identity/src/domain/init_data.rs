//! # Assertion Parsing
//!
//! The platform hands clients a single query-string-encoded blob. Keys are
//! stored sorted (a `BTreeMap`) because the signature check-string requires
//! lexicographic key order anyway; duplicate keys last-wins, matching the
//! decoding the platform's own examples use.

use std::collections::BTreeMap;

/// Parse a raw assertion blob into decoded key/value fields.
pub fn parse_init_data(raw: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        fields.insert(percent_decode(key), percent_decode(value));
    }
    fields
}

/// Decode `application/x-www-form-urlencoded` escapes: `+` is a space,
/// `%XX` is a byte. Malformed escapes pass through verbatim.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push((h * 16 + l) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
