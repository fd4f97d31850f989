//! # Domain Entities
//!
//! Core data structures shared across loyalty subsystems.

use serde::{Deserialize, Serialize};

/// Platform-assigned user id. The platform guarantees it is positive.
pub type OwnerId = i64;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// A verified end-user identity.
///
/// Produced fresh from a platform-signed assertion on every request and
/// discarded afterwards. The core never persists identities; durable profile
/// data is the registration collaborator's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Platform user id.
    pub id: OwnerId,
    /// Platform handle, if the user has one.
    pub username: Option<String>,
    /// Display first name.
    pub first_name: Option<String>,
    /// Display last name.
    pub last_name: Option<String>,
}

impl Identity {
    /// Create an identity carrying only the platform id.
    pub fn from_id(id: OwnerId) -> Self {
        Self {
            id,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}
