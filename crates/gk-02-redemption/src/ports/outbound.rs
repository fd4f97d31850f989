//! # Outbound Ports (Driven Ports)
//!
//! The persistence collaborator this subsystem requires. The store holds the
//! token bytes; this subsystem owns the *transition* (claim) logic.

use crate::domain::entities::RedemptionToken;
use crate::domain::errors::TokenStoreError;
use shared_types::{OwnerId, Timestamp};

/// Abstract interface over redemption-token persistence.
///
/// Production: a SQL/document table. Testing and light production:
/// `InMemoryTokenStore`.
pub trait TokenStore: Send + Sync {
    /// Persist a freshly minted token (with `used_at = None`).
    fn insert(&self, token: RedemptionToken) -> Result<(), TokenStoreError>;

    /// Look up a token by its opaque string.
    fn find(&self, token: &str) -> Result<Option<RedemptionToken>, TokenStoreError>;

    /// Delete every unclaimed token belonging to `owner_id`; returns the
    /// number removed. Advisory cleanup ahead of issuing a fresh token.
    fn delete_unclaimed_for_owner(&self, owner_id: OwnerId) -> Result<u64, TokenStoreError>;

    /// Atomically set `used_at = used_at_ms, used_by_admin = admin_id` **only
    /// if** `used_at` is still `None` at the moment of the write.
    ///
    /// This must be a single-round-trip compare-and-set, not a read followed
    /// by a write: under concurrent claimants exactly one call may observe
    /// `true`. `false` means the token was already claimed or gone.
    fn claim_if_unclaimed(
        &self,
        token: &str,
        admin_id: OwnerId,
        used_at_ms: Timestamp,
    ) -> Result<bool, TokenStoreError>;
}
