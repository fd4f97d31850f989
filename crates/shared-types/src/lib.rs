//! # Shared Types Crate
//!
//! Cross-subsystem types for the GoldKarta loyalty core.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Types used by more than one subsystem are
//!   defined here, never duplicated.
//! - **No Ambient State**: The clock is a port (`TimeSource`), injected at
//!   construction, so every subsystem is deterministic under test.

pub mod entities;
pub mod time;

pub use entities::*;
pub use time::*;
