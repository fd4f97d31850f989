//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{OwnerId, Timestamp};

/// Literal prefix of the externally-presented payload form.
pub const PAYLOAD_PREFIX: &str = "GK1:";

/// Shortest token accepted by the payload parser. A cheap malformed-input
/// filter applied before any store lookup, not a security boundary.
pub const MIN_TOKEN_LEN: usize = 20;

/// Random bytes per token: 192 bits of entropy, hex-encoded to 48 chars.
pub const TOKEN_ENTROPY_BYTES: usize = 24;

/// Default token lifetime: 5 minutes.
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1_000;

/// One redemption token as the store holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionToken {
    /// Opaque random token string.
    pub token: String,
    /// Owner the token was minted for.
    pub owner_id: OwnerId,
    /// Instant after which the token is logically dead.
    pub expires_at: Timestamp,
    /// Claim instant; `None` while the token is live.
    pub used_at: Option<Timestamp>,
    /// The admin that claimed it.
    pub used_by_admin: Option<OwnerId>,
}

impl RedemptionToken {
    /// Whether the token has been consumed.
    pub fn is_claimed(&self) -> bool {
        self.used_at.is_some()
    }

    /// Whether the token is past its expiry at `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }

    /// The externally-presented payload form.
    pub fn payload(&self) -> String {
        format!("{PAYLOAD_PREFIX}{}", self.token)
    }
}

/// What `issue` hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    /// The bare token string.
    pub token: String,
    /// `GK1:`-prefixed payload for QR rendering.
    pub payload: String,
    /// Expiry instant, ms since epoch.
    pub expires_at: Timestamp,
    /// Lifetime the token was minted with, ms.
    pub ttl_ms: u64,
}
