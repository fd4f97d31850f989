//! # Adapters Layer

pub mod memory;
