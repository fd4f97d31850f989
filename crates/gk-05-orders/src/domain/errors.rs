//! # Order Errors

use gk_02_redemption::RedemptionError;
use thiserror::Error;

/// Errors from the order store collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderStoreError {
    #[error("order store lock poisoned")]
    LockPoisoned,

    #[error("order store backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the order service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The amount is not a finite positive number.
    #[error("order amount must be a positive finite number")]
    BadOrderAmount,

    /// The presented payload is not a well-formed `GK1:` token.
    #[error("malformed redemption payload")]
    BadQr,

    /// Consuming the presented token failed; passed through verbatim.
    #[error(transparent)]
    Redemption(#[from] RedemptionError),

    #[error(transparent)]
    Store(#[from] OrderStoreError),
}

impl OrderError {
    /// Stable machine-readable code for the wire envelope.
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::BadOrderAmount => "BAD_ORDER_AMOUNT",
            OrderError::BadQr => "BAD_QR",
            OrderError::Redemption(e) => e.code(),
            OrderError::Store(_) => "STORAGE_ERROR",
        }
    }
}
