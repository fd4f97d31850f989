//! # Order Service
//!
//! The full order sequence:
//!
//! 1. validate the amount,
//! 2. resolve the owner (claiming the presented token if any),
//! 3. read the owner's prior spend and pick the tier from it,
//! 4. insert the order row,
//! 5. credit the cashback points, degrading to a warning on failure.
//!
//! Steps 4 and 5 are not atomic. An order without its cashback row is an
//! acceptable partial state; cashback without an order would not be, which
//! is why the order is written first.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{NewOrder, OrderReceipt, OrderTarget, WARN_CASHBACK_WRITE_FAILED};
use crate::domain::errors::OrderError;
use crate::ports::outbound::OrderStore;
use gk_02_redemption::{parse_payload, RedemptionTokenService};
use gk_03_ledger::LedgerService;
use gk_04_cashback::{cashback_points, TierTable};
use shared_types::{OwnerId, TimeSource};

/// Records orders and accrues their cashback.
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    redemption: Arc<RedemptionTokenService>,
    ledger: Arc<LedgerService>,
    tiers: TierTable,
    clock: Arc<dyn TimeSource>,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        redemption: Arc<RedemptionTokenService>,
        ledger: Arc<LedgerService>,
        tiers: TierTable,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            store,
            redemption,
            ledger,
            tiers,
            clock,
        }
    }

    /// Record an order of `amount` for the resolved owner on behalf of
    /// `admin_id`.
    pub fn place_order(
        &self,
        target: OrderTarget,
        amount: f64,
        admin_id: OwnerId,
    ) -> Result<OrderReceipt, OrderError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(OrderError::BadOrderAmount);
        }

        let (owner_id, qr_token) = match target {
            OrderTarget::Owner(id) => (id, None),
            OrderTarget::QrPayload(payload) => {
                let token = parse_payload(&payload).ok_or(OrderError::BadQr)?;
                let record = self.redemption.claim(token, admin_id)?;
                (record.owner_id, Some(record.token))
            }
        };

        // Tier is decided by spend prior to this order.
        let prior_spend = self.store.total_amount_for_owner(owner_id)?;
        let tier = self.tiers.tier_for(prior_spend).clone();
        let points = cashback_points(amount, &tier);

        let order = self.store.insert(NewOrder {
            owner_id,
            amount,
            cashback_percent: tier.percent,
            cashback_points: points,
            admin_id,
            qr_token,
            created_at: self.clock.now(),
        })?;
        info!(
            "[gk-05] 🧾 order {} for owner {}: {:.2} at tier {} ({} points)",
            order.id, owner_id, amount, tier.name, points
        );

        let warning = if points > 0 {
            let note = format!(
                "Cashback {:.0}% on order {:.2}",
                tier.percent * 100.0,
                amount
            );
            match self.ledger.credit(owner_id, points, &note) {
                Ok(_) => None,
                Err(err) => {
                    warn!(
                        "[gk-05] ⚠️ order {} committed but cashback credit failed: {}",
                        order.id, err
                    );
                    Some(WARN_CASHBACK_WRITE_FAILED)
                }
            }
        } else {
            None
        };

        Ok(OrderReceipt {
            order,
            tier_name: tier.name,
            warning,
        })
    }

    /// Lifetime spend for `owner_id`, as tier selection sees it.
    pub fn total_spend_of(&self, owner_id: OwnerId) -> Result<f64, OrderError> {
        Ok(self.store.total_amount_for_owner(owner_id)?)
    }

    /// The tier table this service prices with.
    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Resolve an order's owner without recording anything (for previews).
    pub fn resolve_order_target(&self, target: &OrderTarget) -> Result<OwnerId, OrderError> {
        match target {
            OrderTarget::Owner(id) => Ok(*id),
            OrderTarget::QrPayload(payload) => {
                let token = parse_payload(payload).ok_or(OrderError::BadQr)?;
                Ok(self.redemption.peek(token)?.owner_id)
            }
        }
    }
}
