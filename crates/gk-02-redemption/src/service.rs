//! # Redemption Token Service
//!
//! Mints one-time tokens and drives the claim transition. The only committed
//! state change is the store-level conditional claim; everything before it is
//! a read and may race freely.

use std::sync::Arc;

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::domain::entities::{
    IssuedToken, RedemptionToken, DEFAULT_TTL_MS, TOKEN_ENTROPY_BYTES,
};
use crate::domain::errors::RedemptionError;
use crate::ports::outbound::TokenStore;
use shared_types::{OwnerId, TimeSource, Timestamp};

/// Issues and claims one-time redemption tokens.
pub struct RedemptionTokenService {
    store: Arc<dyn TokenStore>,
    clock: Arc<dyn TimeSource>,
    ttl_ms: u64,
}

impl RedemptionTokenService {
    /// Create a service with the default 5-minute token lifetime.
    pub fn new(store: Arc<dyn TokenStore>, clock: Arc<dyn TimeSource>) -> Self {
        Self::with_ttl(store, clock, DEFAULT_TTL_MS)
    }

    /// Create a service with an explicit token lifetime in milliseconds.
    pub fn with_ttl(store: Arc<dyn TokenStore>, clock: Arc<dyn TimeSource>, ttl_ms: u64) -> Self {
        Self {
            store,
            clock,
            ttl_ms,
        }
    }

    /// Mint a fresh token for `owner_id`.
    ///
    /// Any unclaimed tokens the owner still holds are deleted first, so at
    /// most one live token per owner exists after this call. The two store
    /// operations are not atomic; a crash between them loses nothing the
    /// owner cannot re-issue.
    pub fn issue(&self, owner_id: OwnerId) -> Result<IssuedToken, RedemptionError> {
        let purged = self.store.delete_unclaimed_for_owner(owner_id)?;
        if purged > 0 {
            debug!("[gk-02] 🧹 purged {} stale token(s) for owner {}", purged, owner_id);
        }

        let mut entropy = [0u8; TOKEN_ENTROPY_BYTES];
        OsRng.fill_bytes(&mut entropy);
        let token = hex::encode(entropy);

        let now = self.clock.now();
        let expires_at = now.saturating_add(self.ttl_ms);
        let record = RedemptionToken {
            token: token.clone(),
            owner_id,
            expires_at,
            used_at: None,
            used_by_admin: None,
        };
        self.store.insert(record.clone())?;

        info!("[gk-02] 🎟️ issued token for owner {} (expires {})", owner_id, expires_at);
        Ok(IssuedToken {
            payload: record.payload(),
            token,
            expires_at,
            ttl_ms: self.ttl_ms,
        })
    }

    /// Read a token and check it is live, without consuming it.
    ///
    /// Anything learned here can be stale the instant the lock drops; only
    /// [`claim`](Self::claim) commits.
    pub fn peek(&self, token: &str) -> Result<RedemptionToken, RedemptionError> {
        let record = self.store.find(token)?.ok_or(RedemptionError::NotFound)?;
        if record.is_claimed() {
            return Err(RedemptionError::AlreadyUsed);
        }
        if record.is_expired(self.clock.now()) {
            return Err(RedemptionError::Expired);
        }
        Ok(record)
    }

    /// Consume a token on behalf of `admin_id`.
    ///
    /// Returns the pre-claim record. A concurrent claimant losing the
    /// compare-and-set sees [`RedemptionError::AlreadyUsed`].
    pub fn claim(
        &self,
        token: &str,
        admin_id: OwnerId,
    ) -> Result<RedemptionToken, RedemptionError> {
        let record = self.peek(token)?;
        let now = self.clock.now();
        if !self.store.claim_if_unclaimed(token, admin_id, now)? {
            warn!("[gk-02] ⚔️ lost claim race for token of owner {}", record.owner_id);
            return Err(RedemptionError::AlreadyUsed);
        }
        info!(
            "[gk-02] ✅ token of owner {} claimed by admin {}",
            record.owner_id, admin_id
        );
        Ok(record)
    }

    /// Instant `ttl_ms` from now, as the issued expiry would be.
    pub fn expiry_from_now(&self) -> Timestamp {
        self.clock.now().saturating_add(self.ttl_ms)
    }
}
