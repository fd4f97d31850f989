//! # Ledger Errors

use thiserror::Error;

/// Errors from the ledger store collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerStoreError {
    #[error("ledger store lock poisoned")]
    LockPoisoned,

    #[error("ledger store backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the ledger service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The requested amount is zero or negative.
    #[error("amount must be a positive whole number of points")]
    BadAmount,

    /// A debit would take the balance below zero.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },

    #[error(transparent)]
    Store(#[from] LedgerStoreError),
}

impl LedgerError {
    /// Stable machine-readable code for the wire envelope.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::BadAmount => "BAD_AMOUNT",
            LedgerError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            LedgerError::Store(_) => "STORAGE_ERROR",
        }
    }
}
