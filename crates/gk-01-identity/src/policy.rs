//! # Admin Policy
//!
//! Flat administrator allow-list. The configuration value is a
//! comma-separated list of platform user ids; membership is an exact match
//! against the stringified id. There are no roles beyond admin/non-admin.

use shared_types::OwnerId;
use std::collections::HashSet;

/// Parsed administrator allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminPolicy {
    admins: HashSet<String>,
}

impl AdminPolicy {
    /// Parse a comma-separated allow-list once. Entries are trimmed and
    /// empty entries discarded.
    pub fn from_csv(csv: &str) -> Self {
        let admins = csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { admins }
    }

    /// Whether the verified identity id is in the allow-list.
    pub fn is_admin(&self, id: OwnerId) -> bool {
        self.admins.contains(&id.to_string())
    }

    /// Number of configured administrators.
    pub fn len(&self) -> usize {
        self.admins.len()
    }

    /// True when no administrator is configured.
    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}
