//! # Domain Entities
//!
//! Response shapes the facade hands to the transport layer. All serialize
//! camelCase to match the embedded client.

use gk_03_ledger::LedgerEntry;
use gk_04_cashback::{CashbackTier, TierProgress};
use gk_05_orders::Order;
use serde::{Deserialize, Serialize};
use shared_types::{Identity, OwnerId, Timestamp};

/// Warning code attached when points were credited through a QR but the
/// token could not be marked used afterwards.
pub const WARN_QR_USED_MARK_FAILED: &str = "QR_USED_MARK_FAILED";

/// Durable registration data for one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub owner_id: OwnerId,
    pub name: String,
    pub phone: String,
    pub created_at: Timestamp,
}

/// Everything the client home screen needs in one round trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub identity: Identity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    pub needs_registration: bool,
    pub is_admin: bool,
    pub balance: i64,
    pub total_spend: f64,
    pub tier: CashbackTier,
    pub progress: TierProgress,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditResponse {
    pub entry: LedgerEntry,
    pub balance: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditByQrResponse {
    pub owner_id: OwnerId,
    pub entry: LedgerEntry,
    pub balance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitResponse {
    pub entry: LedgerEntry,
    pub balance: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOrderResponse {
    pub order: Order,
    pub tier_name: String,
    pub cashback_points: i64,
    pub spend_before: f64,
    pub spend_after: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}
