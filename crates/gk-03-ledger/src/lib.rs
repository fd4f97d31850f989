//! # Points Ledger Subsystem (gk-03)
//!
//! Append-only log of point movements. There is no stored balance anywhere:
//! a balance is always the sum of an owner's entries, so the ledger can
//! never disagree with itself.
//!
//! ## Domain Invariants
//!
//! | # | Invariant | Enforcement |
//! |---|-----------|-------------|
//! | 1 | Entries are never mutated or deleted | the store port has no update/delete |
//! | 2 | `Earn` entries carry a positive amount, `Spend` a negative one | fixed at construction in the service |
//! | 3 | A debit never commits past a zero balance | balance check before append (serialized by the caller) |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::InMemoryLedgerStore;
pub use domain::entities::{EntryKind, LedgerEntry, NewLedgerEntry, DEFAULT_PAGE, MAX_PAGE};
pub use domain::errors::{LedgerError, LedgerStoreError};
pub use ports::outbound::LedgerStore;
pub use service::LedgerService;
