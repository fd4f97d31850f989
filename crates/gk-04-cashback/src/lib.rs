//! # Cashback Tier Engine (gk-04)
//!
//! Pure mapping from cumulative spend to a loyalty tier and its reward rate.
//! No ports, no I/O; the whole subsystem is a static table plus arithmetic.
//!
//! Tier selection for an order always uses cumulative spend **strictly
//! prior** to that order: an order never counts toward its own tier.

pub mod tiers;

pub use tiers::{cashback_points, CashbackTier, TierProgress, TierTable, TierTableError};
