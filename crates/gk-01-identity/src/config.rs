//! # Auth Configuration
//!
//! Explicitly constructed and injected; nothing here is read from ambient
//! state at call time. `from_env` exists for hosts that want to load the
//! values once at startup.

use crate::policy::AdminPolicy;
use thiserror::Error;

/// Environment variable holding the platform shared secret.
pub const ENV_SECRET: &str = "GK_PLATFORM_SECRET";
/// Environment variable holding the comma-separated admin allow-list.
pub const ENV_ADMIN_IDS: &str = "GK_ADMIN_IDS";
/// Environment variable holding the optional assertion freshness window.
pub const ENV_MAX_AUTH_AGE: &str = "GK_AUTH_MAX_AGE_SECS";

/// Configuration for identity verification and admin authorization.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared secret issued by the chat platform.
    pub secret: Vec<u8>,
    /// Administrator allow-list, parsed once.
    pub admins: AdminPolicy,
    /// Optional freshness window for the assertion's `auth_date`, in seconds.
    /// `None` accepts assertions of any age, which is the platform default.
    pub max_auth_age_secs: Option<u64>,
}

/// Errors loading configuration at startup.
#[derive(Debug, Error)]
pub enum AuthConfigError {
    /// The shared secret is absent or empty.
    #[error("missing platform secret ({ENV_SECRET})")]
    MissingSecret,

    /// The freshness window is set but not a number of seconds.
    #[error("invalid {ENV_MAX_AUTH_AGE} value: {0}")]
    InvalidMaxAuthAge(String),
}

impl AuthConfig {
    /// Build a config from explicit values.
    pub fn new(secret: impl Into<Vec<u8>>, admin_csv: &str) -> Self {
        Self {
            secret: secret.into(),
            admins: AdminPolicy::from_csv(admin_csv),
            max_auth_age_secs: None,
        }
    }

    /// Enable the assertion freshness window.
    pub fn with_max_auth_age(mut self, secs: u64) -> Self {
        self.max_auth_age_secs = Some(secs);
        self
    }

    /// Load the config from the process environment, once, at startup.
    pub fn from_env() -> Result<Self, AuthConfigError> {
        let secret = std::env::var(ENV_SECRET).unwrap_or_default();
        if secret.is_empty() {
            return Err(AuthConfigError::MissingSecret);
        }
        let admin_csv = std::env::var(ENV_ADMIN_IDS).unwrap_or_default();

        let mut config = Self::new(secret, &admin_csv);
        if let Ok(raw) = std::env::var(ENV_MAX_AUTH_AGE) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| AuthConfigError::InvalidMaxAuthAge(raw.clone()))?;
            config.max_auth_age_secs = Some(secs);
        }
        Ok(config)
    }
}
