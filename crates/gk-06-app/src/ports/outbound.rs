//! # Outbound Ports (Driven Ports)

use crate::domain::entities::Profile;
use crate::domain::errors::ProfileStoreError;
use shared_types::{OwnerId, Timestamp};

/// Abstract interface over registration persistence.
pub trait ProfileStore: Send + Sync {
    /// Look up an owner's profile.
    fn find(&self, owner_id: OwnerId) -> Result<Option<Profile>, ProfileStoreError>;

    /// Create or update a profile. An existing profile keeps its original
    /// `created_at`; `now` is only used for first registration.
    fn upsert(
        &self,
        owner_id: OwnerId,
        name: &str,
        phone: &str,
        now: Timestamp,
    ) -> Result<Profile, ProfileStoreError>;
}
