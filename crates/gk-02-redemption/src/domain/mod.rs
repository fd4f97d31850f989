//! # Domain Layer
//!
//! Token entities, payload grammar, and error taxonomy. No I/O.

pub mod entities;
pub mod errors;
pub mod payload;
