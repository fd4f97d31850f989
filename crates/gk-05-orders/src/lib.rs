//! # Orders Subsystem (gk-05)
//!
//! Records purchases and accrues cashback points through the ledger. The
//! cashback tier is decided by the owner's spend *prior to* the order being
//! placed, so the order that crosses a tier boundary still earns at the old
//! rate.
//!
//! ## Domain Invariants
//!
//! | # | Invariant | Enforcement |
//! |---|-----------|-------------|
//! | 1 | Tier lookup uses the pre-order spend total | total read before the order row is inserted |
//! | 2 | A QR-targeted order consumes the token before any write | claim runs first; its errors abort the order |
//! | 3 | Cashback of zero points writes no ledger row | checked before the credit |
//! | 4 | A failed cashback credit degrades to a warning | the order row is already committed and stays |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::InMemoryOrderStore;
pub use domain::entities::{NewOrder, Order, OrderReceipt, OrderTarget, WARN_CASHBACK_WRITE_FAILED};
pub use domain::errors::{OrderError, OrderStoreError};
pub use ports::outbound::OrderStore;
pub use service::OrderService;
