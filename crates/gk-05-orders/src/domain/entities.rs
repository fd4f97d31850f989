//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{OwnerId, Timestamp};

/// Warning code attached to a receipt whose cashback credit failed after the
/// order row was already committed.
pub const WARN_CASHBACK_WRITE_FAILED: &str = "CASHBACK_WRITE_FAILED";

/// Who the order is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderTarget {
    /// The owner is named directly by id.
    Owner(OwnerId),
    /// The owner is resolved by consuming a presented `GK1:` payload.
    QrPayload(String),
}

/// One committed order row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned, strictly increasing within a store.
    pub id: u64,
    pub owner_id: OwnerId,
    /// Purchase amount in currency units.
    pub amount: f64,
    /// Rate applied, e.g. `0.05`.
    pub cashback_percent: f64,
    /// Whole points accrued: `floor(amount * cashback_percent)`.
    pub cashback_points: i64,
    /// Admin who recorded the order.
    pub admin_id: OwnerId,
    /// Token consumed to resolve the owner, if the order came in by QR.
    pub qr_token: Option<String>,
    pub created_at: Timestamp,
}

/// An order about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub owner_id: OwnerId,
    pub amount: f64,
    pub cashback_percent: f64,
    pub cashback_points: i64,
    pub admin_id: OwnerId,
    pub qr_token: Option<String>,
    pub created_at: Timestamp,
}

/// What `place_order` hands back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order: Order,
    /// Name of the tier whose rate was applied.
    pub tier_name: String,
    /// Set when the order committed but a follow-up write degraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}
