//! # Ledger Service
//!
//! Validates amounts and fixes entry signs; the store only ever sees
//! well-formed rows.
//!
//! The over-debit check here is read-then-write. Callers that can see
//! concurrent debits for the same owner must serialize them (the application
//! facade keeps a per-owner lock for exactly this).

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{EntryKind, LedgerEntry, NewLedgerEntry, DEFAULT_PAGE, MAX_PAGE};
use crate::domain::errors::LedgerError;
use crate::ports::outbound::LedgerStore;
use shared_types::{OwnerId, TimeSource};

/// Appends and reads point movements for owners.
pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
    clock: Arc<dyn TimeSource>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn LedgerStore>, clock: Arc<dyn TimeSource>) -> Self {
        Self { store, clock }
    }

    /// Append an `Earn` row of `points` for `owner_id`.
    pub fn credit(
        &self,
        owner_id: OwnerId,
        points: i64,
        note: &str,
    ) -> Result<LedgerEntry, LedgerError> {
        if points <= 0 {
            return Err(LedgerError::BadAmount);
        }
        let row = self.store.append(NewLedgerEntry {
            owner_id,
            kind: EntryKind::Earn,
            amount: points,
            note: note.to_string(),
            created_at: self.clock.now(),
        })?;
        info!("[gk-03] 💰 +{} points for owner {} (entry {})", points, owner_id, row.id);
        Ok(row)
    }

    /// Append a `Spend` row of `points` for `owner_id`, refusing to commit
    /// past a zero balance.
    pub fn debit(
        &self,
        owner_id: OwnerId,
        points: i64,
        note: &str,
    ) -> Result<LedgerEntry, LedgerError> {
        if points <= 0 {
            return Err(LedgerError::BadAmount);
        }
        let balance = self.store.sum_for_owner(owner_id)?;
        if balance < points {
            return Err(LedgerError::InsufficientFunds {
                balance,
                requested: points,
            });
        }
        let row = self.store.append(NewLedgerEntry {
            owner_id,
            kind: EntryKind::Spend,
            amount: -points,
            note: note.to_string(),
            created_at: self.clock.now(),
        })?;
        info!("[gk-03] 💸 -{} points for owner {} (entry {})", points, owner_id, row.id);
        Ok(row)
    }

    /// Current balance: the signed sum of the owner's entries.
    pub fn balance_of(&self, owner_id: OwnerId) -> Result<i64, LedgerError> {
        Ok(self.store.sum_for_owner(owner_id)?)
    }

    /// Recent history, newest first. `None` means the default page size;
    /// anything above [`MAX_PAGE`] is clamped down to it.
    pub fn recent_for(
        &self,
        owner_id: OwnerId,
        limit: Option<usize>,
    ) -> Result<Vec<LedgerEntry>, LedgerError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE).min(MAX_PAGE);
        Ok(self.store.recent_for_owner(owner_id, limit)?)
    }
}
