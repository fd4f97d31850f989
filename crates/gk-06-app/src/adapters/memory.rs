//! # In-Memory Profile Store

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::Profile;
use crate::domain::errors::ProfileStoreError;
use crate::ports::outbound::ProfileStore;
use shared_types::{OwnerId, Timestamp};

/// In-memory [`ProfileStore`] keyed by owner id.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<OwnerId, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn find(&self, owner_id: OwnerId) -> Result<Option<Profile>, ProfileStoreError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| ProfileStoreError::LockPoisoned)?;
        Ok(profiles.get(&owner_id).cloned())
    }

    fn upsert(
        &self,
        owner_id: OwnerId,
        name: &str,
        phone: &str,
        now: Timestamp,
    ) -> Result<Profile, ProfileStoreError> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| ProfileStoreError::LockPoisoned)?;
        let created_at = profiles.get(&owner_id).map(|p| p.created_at).unwrap_or(now);
        let profile = Profile {
            owner_id,
            name: name.to_string(),
            phone: phone.to_string(),
            created_at,
        };
        profiles.insert(owner_id, profile.clone());
        Ok(profile)
    }
}
