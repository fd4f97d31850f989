//! # In-Memory Ledger Store
//!
//! `RwLock<Vec>` implementation of [`LedgerStore`]. Ids come from an atomic
//! counter, so they are strictly increasing even across concurrent appends.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::domain::entities::{LedgerEntry, NewLedgerEntry};
use crate::domain::errors::LedgerStoreError;
use crate::ports::outbound::LedgerStore;
use shared_types::OwnerId;

/// In-memory [`LedgerStore`] backed by an append-only `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    entries: RwLock<Vec<LedgerEntry>>,
    next_id: AtomicU64,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows across all owners.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn append(&self, entry: NewLedgerEntry) -> Result<LedgerEntry, LedgerStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| LedgerStoreError::LockPoisoned)?;
        let row = LedgerEntry {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            owner_id: entry.owner_id,
            kind: entry.kind,
            amount: entry.amount,
            note: entry.note,
            created_at: entry.created_at,
        };
        entries.push(row.clone());
        Ok(row)
    }

    fn sum_for_owner(&self, owner_id: OwnerId) -> Result<i64, LedgerStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LedgerStoreError::LockPoisoned)?;
        Ok(entries
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .map(|e| e.amount)
            .sum())
    }

    fn recent_for_owner(
        &self,
        owner_id: OwnerId,
        limit: usize,
    ) -> Result<Vec<LedgerEntry>, LedgerStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LedgerStoreError::LockPoisoned)?;
        Ok(entries
            .iter()
            .rev()
            .filter(|e| e.owner_id == owner_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
