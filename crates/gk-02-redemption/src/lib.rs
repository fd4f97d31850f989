//! # Redemption Token Subsystem (gk-02)
//!
//! Issues and atomically consumes the one-time tokens customers present (as
//! a QR payload) so an admin can resolve them without manual id entry.
//!
//! ## State Machine
//!
//! ```text
//! Created(used_at = None) ──claim──→ Claimed(used_at = now)
//!        │
//!        └──(now > expires_at)──→ Expired (lazy, never swept)
//! ```
//!
//! ## Domain Invariants
//!
//! | # | Invariant | Enforcement |
//! |---|-----------|-------------|
//! | 1 | At most one committed claim per token | store-level compare-and-set on `used_at = None` |
//! | 2 | Expiry is evaluated lazily at claim time | no background sweeper; dead rows persist |
//! | 3 | Issuing deletes the owner's older unclaimed tokens | advisory cleanup, not a uniqueness constraint |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::InMemoryTokenStore;
pub use domain::entities::{
    IssuedToken, RedemptionToken, DEFAULT_TTL_MS, MIN_TOKEN_LEN, PAYLOAD_PREFIX,
    TOKEN_ENTROPY_BYTES,
};
pub use domain::errors::{RedemptionError, TokenStoreError};
pub use domain::payload::parse_payload;
pub use ports::outbound::TokenStore;
pub use service::RedemptionTokenService;
