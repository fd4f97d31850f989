//! # Outbound Ports (Driven Ports)

use crate::domain::entities::{LedgerEntry, NewLedgerEntry};
use crate::domain::errors::LedgerStoreError;
use shared_types::OwnerId;

/// Abstract interface over ledger persistence.
///
/// Deliberately has no update or delete: the ledger is append-only by
/// construction, not by discipline.
pub trait LedgerStore: Send + Sync {
    /// Append a row and return it with its assigned id.
    fn append(&self, entry: NewLedgerEntry) -> Result<LedgerEntry, LedgerStoreError>;

    /// Signed sum of every entry belonging to `owner_id`.
    fn sum_for_owner(&self, owner_id: OwnerId) -> Result<i64, LedgerStoreError>;

    /// Up to `limit` most recent entries for `owner_id`, newest first.
    fn recent_for_owner(
        &self,
        owner_id: OwnerId,
        limit: usize,
    ) -> Result<Vec<LedgerEntry>, LedgerStoreError>;
}
