//! # Redemption Errors

use thiserror::Error;

/// Errors from the token store collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenStoreError {
    /// An in-process lock was poisoned by a panicking writer.
    #[error("token store lock poisoned")]
    LockPoisoned,

    /// The backing store failed; detail is opaque to the core.
    #[error("token store backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the redemption service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RedemptionError {
    /// No such token exists.
    #[error("token not found")]
    NotFound,

    /// The token was already claimed (possibly by a concurrent claimant
    /// between our read and the conditional write).
    #[error("token already used")]
    AlreadyUsed,

    /// The token's expiry instant has passed.
    #[error("token expired")]
    Expired,

    /// The store collaborator failed.
    #[error(transparent)]
    Store(#[from] TokenStoreError),
}

impl RedemptionError {
    /// Stable machine-readable code for the wire envelope.
    pub fn code(&self) -> &'static str {
        match self {
            RedemptionError::NotFound => "QR_NOT_FOUND",
            RedemptionError::AlreadyUsed => "QR_ALREADY_USED",
            RedemptionError::Expired => "QR_EXPIRED",
            RedemptionError::Store(_) => "STORAGE_ERROR",
        }
    }
}
