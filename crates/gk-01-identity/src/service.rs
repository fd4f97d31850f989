//! # Identity Verification Service
//!
//! Wires the pure domain logic to an injected config and clock. One instance
//! is shared by every inbound request; it holds no per-request state.

use crate::config::AuthConfig;
use crate::domain::entities::{InitData, VerifiedAssertion};
use crate::domain::errors::AuthError;
use crate::domain::init_data::parse_init_data;
use crate::domain::verify::verify_fields;
use shared_types::{OwnerId, TimeSource};
use std::sync::Arc;

/// Verifies platform assertions and answers authorization questions.
pub struct IdentityVerifier {
    config: AuthConfig,
    clock: Arc<dyn TimeSource>,
}

impl IdentityVerifier {
    /// Create a verifier from an injected config and clock.
    pub fn new(config: AuthConfig, clock: Arc<dyn TimeSource>) -> Self {
        Self { config, clock }
    }

    /// Full verification: signature, optional freshness, identity extraction.
    pub fn verify(&self, init_data: &str) -> Result<VerifiedAssertion, AuthError> {
        let fields = parse_init_data(init_data);
        verify_fields(&fields, &self.config.secret)?;

        if let Some(max_age) = self.config.max_auth_age_secs {
            let now_secs = self.clock.now() / 1_000;
            let auth_date = fields
                .get("auth_date")
                .and_then(|v| v.parse::<u64>().ok())
                .ok_or(AuthError::Stale)?;
            if auth_date.saturating_add(max_age) < now_secs {
                return Err(AuthError::Stale);
            }
        }

        let init_data = InitData::new(fields);
        let identity = init_data.identity()?;
        Ok(VerifiedAssertion {
            identity,
            init_data,
        })
    }

    /// Whether a verified id is in the administrator allow-list.
    pub fn is_admin(&self, id: OwnerId) -> bool {
        self.config.admins.is_admin(id)
    }
}
