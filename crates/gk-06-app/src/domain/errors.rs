//! # Application Errors
//!
//! One enum over every way a request can fail, each variant mapping to a
//! stable wire code. Storage failures surface with an opaque detail string;
//! they are never swallowed.

use gk_01_identity::AuthError;
use gk_02_redemption::RedemptionError;
use gk_03_ledger::LedgerError;
use gk_05_orders::OrderError;
use thiserror::Error;

/// Errors from the profile store collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileStoreError {
    #[error("profile store lock poisoned")]
    LockPoisoned,

    #[error("profile store backend error: {0}")]
    Backend(String),
}

/// Everything an application operation can fail with.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// The request carried no assertion at all.
    #[error("no init data supplied")]
    NoInitData,

    /// Signature or identity verification failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The verified caller is not an admin.
    #[error("caller is not an admin")]
    Forbidden,

    /// Registration requires accepting the terms.
    #[error("terms must be accepted")]
    MustAgree,

    /// Trimmed name shorter than 2 characters.
    #[error("name too short")]
    BadName,

    /// Trimmed phone shorter than 8 characters.
    #[error("phone too short")]
    BadPhone,

    /// The presented payload is not a well-formed redemption payload.
    #[error("malformed redemption payload")]
    BadQr,

    /// An order names neither a target id nor a QR payload.
    #[error("no order target supplied")]
    NoTarget,

    #[error(transparent)]
    Redemption(#[from] RedemptionError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Profile(#[from] ProfileStoreError),
}

impl AppError {
    /// Stable machine-readable code for the wire envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NoInitData => "NO_INIT_DATA",
            AppError::Auth(e) => e.code(),
            AppError::Forbidden => "FORBIDDEN",
            AppError::MustAgree => "MUST_AGREE",
            AppError::BadName => "BAD_NAME",
            AppError::BadPhone => "BAD_PHONE",
            AppError::BadQr => "BAD_QR",
            AppError::NoTarget => "NO_TARGET",
            AppError::Redemption(e) => e.code(),
            AppError::Ledger(e) => e.code(),
            AppError::Order(e) => e.code(),
            AppError::Profile(_) => "STORAGE_ERROR",
        }
    }
}
