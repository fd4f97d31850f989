//! # GoldKarta Test Suite
//!
//! Unified test crate for cross-subsystem choreography. Per-crate logic lives
//! in each crate's own `#[cfg(test)]` modules; what lives here are the flows
//! that only exist when identity, redemption, ledger, cashback and orders run
//! against each other.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── auth_flows.rs      # signed-assertion verification end to end
//!     ├── redemption_flows.rs# issue → claim races and expiry
//!     └── loyalty_flows.rs   # orders, cashback tiers, credits and debits
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gk-tests
//! cargo test -p gk-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
