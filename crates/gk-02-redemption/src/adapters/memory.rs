//! # In-Memory Token Store
//!
//! `RwLock<HashMap>` implementation of [`TokenStore`]. The conditional claim
//! runs under a single write lock, so the compare-and-set invariant holds
//! without any backend support.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::RedemptionToken;
use crate::domain::errors::TokenStoreError;
use crate::ports::outbound::TokenStore;
use shared_types::{OwnerId, Timestamp};

/// In-memory [`TokenStore`] keyed by token string.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    tokens: RwLock<HashMap<String, RedemptionToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens currently held (claimed or not).
    pub fn len(&self) -> usize {
        self.tokens.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TokenStore for InMemoryTokenStore {
    fn insert(&self, token: RedemptionToken) -> Result<(), TokenStoreError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| TokenStoreError::LockPoisoned)?;
        tokens.insert(token.token.clone(), token);
        Ok(())
    }

    fn find(&self, token: &str) -> Result<Option<RedemptionToken>, TokenStoreError> {
        let tokens = self
            .tokens
            .read()
            .map_err(|_| TokenStoreError::LockPoisoned)?;
        Ok(tokens.get(token).cloned())
    }

    fn delete_unclaimed_for_owner(&self, owner_id: OwnerId) -> Result<u64, TokenStoreError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| TokenStoreError::LockPoisoned)?;
        let before = tokens.len();
        tokens.retain(|_, t| t.owner_id != owner_id || t.is_claimed());
        Ok((before - tokens.len()) as u64)
    }

    fn claim_if_unclaimed(
        &self,
        token: &str,
        admin_id: OwnerId,
        used_at_ms: Timestamp,
    ) -> Result<bool, TokenStoreError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| TokenStoreError::LockPoisoned)?;
        match tokens.get_mut(token) {
            Some(t) if !t.is_claimed() => {
                t.used_at = Some(used_at_ms);
                t.used_by_admin = Some(admin_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn sample(token: &str, owner_id: OwnerId) -> RedemptionToken {
        RedemptionToken {
            token: token.to_string(),
            owner_id,
            expires_at: 10_000,
            used_at: None,
            used_by_admin: None,
        }
    }

    #[test]
    fn test_insert_and_find_round_trip() {
        let store = InMemoryTokenStore::new();
        store.insert(sample("tok-a", 1)).unwrap();
        let found = store.find("tok-a").unwrap().unwrap();
        assert_eq!(found.owner_id, 1);
        assert!(store.find("tok-b").unwrap().is_none());
    }

    #[test]
    fn test_delete_unclaimed_spares_claimed_and_other_owners() {
        let store = InMemoryTokenStore::new();
        store.insert(sample("live", 1)).unwrap();
        let mut claimed = sample("claimed", 1);
        claimed.used_at = Some(5_000);
        store.insert(claimed).unwrap();
        store.insert(sample("other", 2)).unwrap();

        let removed = store.delete_unclaimed_for_owner(1).unwrap();
        assert_eq!(removed, 1);
        assert!(store.find("live").unwrap().is_none());
        assert!(store.find("claimed").unwrap().is_some());
        assert!(store.find("other").unwrap().is_some());
    }

    #[test]
    fn test_claim_is_first_writer_wins() {
        let store = InMemoryTokenStore::new();
        store.insert(sample("tok", 1)).unwrap();

        assert!(store.claim_if_unclaimed("tok", 99, 5_000).unwrap());
        assert!(!store.claim_if_unclaimed("tok", 100, 6_000).unwrap());

        let t = store.find("tok").unwrap().unwrap();
        assert_eq!(t.used_at, Some(5_000));
        assert_eq!(t.used_by_admin, Some(99));
    }

    #[test]
    fn test_claim_missing_token_is_false() {
        let store = InMemoryTokenStore::new();
        assert!(!store.claim_if_unclaimed("ghost", 1, 1).unwrap());
    }

    #[test]
    fn test_concurrent_claims_have_exactly_one_winner() {
        let store = Arc::new(InMemoryTokenStore::new());
        store.insert(sample("tok", 1)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|admin| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.claim_if_unclaimed("tok", admin, 5_000).unwrap())
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();
        assert_eq!(wins, 1);
    }
}
