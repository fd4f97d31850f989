//! # Domain Layer
//!
//! Pure assertion parsing and signature checking, no I/O dependencies.

pub mod entities;
pub mod errors;
pub mod init_data;
pub mod verify;
