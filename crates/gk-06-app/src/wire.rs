//! # Wire Envelope
//!
//! The single response shape the transport layer emits: success payloads are
//! flattened next to `ok`, failures carry a stable code plus a human detail.

use crate::domain::errors::AppError;
use serde::Serialize;

/// `{ "ok": true, ... }` or `{ "ok": false, "error": CODE, "details": ... }`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEnvelope<T> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn failure(err: &AppError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(err.code()),
            details: Some(err.to_string()),
        }
    }

    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(&err),
        }
    }
}
