//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{OwnerId, Timestamp};

/// Default page size for history listings.
pub const DEFAULT_PAGE: usize = 20;

/// Hard ceiling on a single history page.
pub const MAX_PAGE: usize = 100;

/// Direction of a point movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "EARN")]
    Earn,
    #[serde(rename = "SPEND")]
    Spend,
}

/// One committed ledger row. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Store-assigned, strictly increasing within a store.
    pub id: u64,
    pub owner_id: OwnerId,
    pub kind: EntryKind,
    /// Signed points: positive for [`EntryKind::Earn`], negative for
    /// [`EntryKind::Spend`].
    pub amount: i64,
    /// Free-form audit note.
    pub note: String,
    pub created_at: Timestamp,
}

/// A row about to be appended; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLedgerEntry {
    pub owner_id: OwnerId,
    pub kind: EntryKind,
    pub amount: i64,
    pub note: String,
    pub created_at: Timestamp,
}
