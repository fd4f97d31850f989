//! # Application Facade (gk-06)
//!
//! Transport-agnostic orchestration of the loyalty subsystems. An HTTP layer
//! (out of scope here) hands each operation the raw signed assertion plus the
//! request body fields; verification, admin gating, and cross-subsystem
//! sequencing all happen behind this facade.
//!
//! ## Rules The Facade Owns
//!
//! | # | Rule | Where |
//! |---|------|-------|
//! | 1 | Every operation re-verifies the assertion; privileged ones also consult the admin policy | `App::verify` / `App::verify_admin` |
//! | 2 | Debits for one owner are serialized in-process | per-owner lock map in `App::admin_debit` |
//! | 3 | Credit-by-QR commits the points first and tolerates a failed claim | `App::admin_credit_by_qr` |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod telemetry;
pub mod wire;

pub use adapters::memory::InMemoryProfileStore;
pub use domain::entities::{
    CreditByQrResponse, CreditResponse, DebitResponse, MeResponse, Profile, RecordOrderResponse,
    RegisterResponse, WARN_QR_USED_MARK_FAILED,
};
pub use domain::errors::{AppError, ProfileStoreError};
pub use ports::outbound::ProfileStore;
pub use service::App;
pub use telemetry::init_tracing;
pub use wire::ApiEnvelope;
