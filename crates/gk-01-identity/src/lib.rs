//! # Identity Verification Subsystem (gk-01)
//!
//! Validates platform-signed identity assertions and answers the
//! admin-authorization question for privileged operations.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure parsing and HMAC logic, no I/O
//! - **Policy** (`policy.rs`): Flat administrator allow-list
//! - **Service Layer** (`service.rs`): Wires config + clock to the domain
//!
//! ## Security Notes
//!
//! - The expected signature is compared in constant time; a length mismatch
//!   is rejected up front with a distinct failure reason.
//! - An optional freshness window (`AuthConfig::max_auth_age_secs`) bounds
//!   how old an assertion's `auth_date` may be. It is off by default, which
//!   matches the platform's own contract: a captured assertion stays valid
//!   until the shared secret rotates.

pub mod config;
pub mod domain;
pub mod policy;
pub mod service;
pub mod testkit;

pub use config::{AuthConfig, AuthConfigError};
pub use domain::entities::{InitData, VerifiedAssertion};
pub use domain::errors::AuthError;
pub use domain::init_data::parse_init_data;
pub use domain::verify::{check_string, verify_fields};
pub use policy::AdminPolicy;
pub use service::IdentityVerifier;
