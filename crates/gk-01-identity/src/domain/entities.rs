//! # Domain Entities

use super::errors::AuthError;
use serde::Deserialize;
use shared_types::Identity;
use std::collections::BTreeMap;

/// The decoded fields of a platform assertion, after signature verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitData {
    fields: BTreeMap<String, String>,
}

/// Shape of the JSON-encoded `user` field inside an assertion.
#[derive(Debug, Deserialize)]
struct UserField {
    id: i64,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

impl InitData {
    /// Wrap already-parsed fields.
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Raw field access.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The assertion's issue time, unix seconds, if present and numeric.
    pub fn auth_date(&self) -> Option<u64> {
        self.get("auth_date").and_then(|v| v.parse().ok())
    }

    /// Decode the `user` field into an [`Identity`].
    ///
    /// Fails with [`AuthError::NoUser`] when the field is absent, is not
    /// valid JSON, or carries a non-positive id.
    pub fn identity(&self) -> Result<Identity, AuthError> {
        let raw = self.get("user").ok_or(AuthError::NoUser)?;
        let user: UserField = serde_json::from_str(raw).map_err(|_| AuthError::NoUser)?;
        if user.id <= 0 {
            return Err(AuthError::NoUser);
        }
        Ok(Identity {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        })
    }
}

/// A fully verified assertion: proven-authentic fields plus the identity
/// extracted from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAssertion {
    /// Who the platform says is making the request.
    pub identity: Identity,
    /// The remaining verified fields, for callers that need more than the id.
    pub init_data: InitData,
}
