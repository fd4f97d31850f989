//! # Application Service
//!
//! One facade object per process. Every operation takes the raw signed
//! assertion; nothing is trusted until [`IdentityVerifier`] has spoken.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::adapters::memory::InMemoryProfileStore;
use crate::domain::entities::{
    CreditByQrResponse, CreditResponse, DebitResponse, MeResponse, RecordOrderResponse,
    RegisterResponse, WARN_QR_USED_MARK_FAILED,
};
use crate::domain::errors::{AppError, ProfileStoreError};
use crate::ports::outbound::ProfileStore;
use gk_01_identity::{AuthConfig, IdentityVerifier};
use gk_02_redemption::{
    parse_payload, InMemoryTokenStore, IssuedToken, RedemptionTokenService,
};
use gk_03_ledger::{InMemoryLedgerStore, LedgerEntry, LedgerService};
use gk_04_cashback::TierTable;
use gk_05_orders::{InMemoryOrderStore, OrderError, OrderService, OrderTarget};
use shared_types::{Identity, OwnerId, TimeSource};

/// Minimum character count of a trimmed registration name.
const MIN_NAME_CHARS: usize = 2;

/// Minimum character count of a trimmed registration phone.
const MIN_PHONE_CHARS: usize = 8;

/// The transport-agnostic application facade.
pub struct App {
    verifier: IdentityVerifier,
    redemption: Arc<RedemptionTokenService>,
    ledger: Arc<LedgerService>,
    orders: Arc<OrderService>,
    profiles: Arc<dyn ProfileStore>,
    clock: Arc<dyn TimeSource>,
    // Serializes the ledger's check-then-append per owner so concurrent
    // debits cannot both pass the balance check. Holds one entry per owner
    // ever debited and never evicts; each entry is a single empty mutex.
    debit_locks: Mutex<HashMap<OwnerId, Arc<Mutex<()>>>>,
}

impl App {
    pub fn new(
        verifier: IdentityVerifier,
        redemption: Arc<RedemptionTokenService>,
        ledger: Arc<LedgerService>,
        orders: Arc<OrderService>,
        profiles: Arc<dyn ProfileStore>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            verifier,
            redemption,
            ledger,
            orders,
            profiles,
            clock,
            debit_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Wire the whole core against in-memory stores.
    pub fn in_memory(config: AuthConfig, clock: Arc<dyn TimeSource>) -> Self {
        let verifier = IdentityVerifier::new(config, Arc::clone(&clock));
        let redemption = Arc::new(RedemptionTokenService::new(
            Arc::new(InMemoryTokenStore::new()),
            Arc::clone(&clock),
        ));
        let ledger = Arc::new(LedgerService::new(
            Arc::new(InMemoryLedgerStore::new()),
            Arc::clone(&clock),
        ));
        let orders = Arc::new(OrderService::new(
            Arc::new(InMemoryOrderStore::new()),
            Arc::clone(&redemption),
            Arc::clone(&ledger),
            TierTable::standard(),
            Arc::clone(&clock),
        ));
        Self::new(
            verifier,
            redemption,
            ledger,
            orders,
            Arc::new(InMemoryProfileStore::new()),
            clock,
        )
    }

    fn verify(&self, init_data: &str) -> Result<Identity, AppError> {
        if init_data.trim().is_empty() {
            return Err(AppError::NoInitData);
        }
        Ok(self.verifier.verify(init_data)?.identity)
    }

    fn verify_admin(&self, init_data: &str) -> Result<Identity, AppError> {
        let identity = self.verify(init_data)?;
        if !self.verifier.is_admin(identity.id) {
            warn!("[gk-06] 🚫 non-admin {} attempted a privileged call", identity.id);
            return Err(AppError::Forbidden);
        }
        Ok(identity)
    }

    fn owner_lock(&self, owner_id: OwnerId) -> Result<Arc<Mutex<()>>, AppError> {
        let mut locks = self
            .debit_locks
            .lock()
            .map_err(|_| AppError::Profile(ProfileStoreError::LockPoisoned))?;
        Ok(Arc::clone(locks.entry(owner_id).or_default()))
    }

    /// Everything the client home screen needs: profile, balance, tier.
    pub fn me(&self, init_data: &str) -> Result<MeResponse, AppError> {
        let identity = self.verify(init_data)?;
        let profile = self.profiles.find(identity.id)?;
        let balance = self.ledger.balance_of(identity.id)?;
        let total_spend = self.orders.total_spend_of(identity.id)?;
        let tiers = self.orders.tiers();
        Ok(MeResponse {
            needs_registration: profile.is_none(),
            is_admin: self.verifier.is_admin(identity.id),
            balance,
            total_spend,
            tier: tiers.tier_for(total_spend).clone(),
            progress: tiers.progress(total_spend),
            profile,
            identity,
        })
    }

    /// Create or update the caller's registration profile.
    pub fn register(
        &self,
        init_data: &str,
        name: &str,
        phone: &str,
        agree: bool,
    ) -> Result<RegisterResponse, AppError> {
        let identity = self.verify(init_data)?;
        if !agree {
            return Err(AppError::MustAgree);
        }
        let name = name.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            return Err(AppError::BadName);
        }
        let phone = phone.trim();
        if phone.chars().count() < MIN_PHONE_CHARS {
            return Err(AppError::BadPhone);
        }
        let profile = self.profiles.upsert(identity.id, name, phone, self.clock.now())?;
        info!("[gk-06] 📝 owner {} registered", identity.id);
        Ok(RegisterResponse { profile })
    }

    /// Mint a fresh one-time token for the caller.
    pub fn issue_qr_token(&self, init_data: &str) -> Result<IssuedToken, AppError> {
        let identity = self.verify(init_data)?;
        Ok(self.redemption.issue(identity.id)?)
    }

    /// The caller's recent ledger history, newest first.
    pub fn transactions(
        &self,
        init_data: &str,
        limit: Option<usize>,
    ) -> Result<Vec<LedgerEntry>, AppError> {
        let identity = self.verify(init_data)?;
        Ok(self.ledger.recent_for(identity.id, limit)?)
    }

    /// Credit `amount` points to `target_id` (admin only).
    pub fn admin_credit(
        &self,
        init_data: &str,
        target_id: OwnerId,
        amount: i64,
        note: Option<&str>,
    ) -> Result<CreditResponse, AppError> {
        let admin = self.verify_admin(init_data)?;
        let default_note = format!("EARN by admin {}", admin.id);
        let note = note.filter(|n| !n.trim().is_empty()).unwrap_or(&default_note);
        let entry = self.ledger.credit(target_id, amount, note)?;
        let balance = self.ledger.balance_of(target_id)?;
        Ok(CreditResponse { entry, balance })
    }

    /// Credit `amount` points to whoever the presented token belongs to,
    /// consuming the token (admin only).
    ///
    /// The credit commits before the claim. A claim failure afterwards never
    /// takes the points back; it degrades to [`WARN_QR_USED_MARK_FAILED`].
    pub fn admin_credit_by_qr(
        &self,
        init_data: &str,
        qr_payload: &str,
        amount: i64,
        note: Option<&str>,
    ) -> Result<CreditByQrResponse, AppError> {
        let admin = self.verify_admin(init_data)?;
        let token = parse_payload(qr_payload).ok_or(AppError::BadQr)?;
        let record = self.redemption.peek(token)?;

        let default_note = format!("EARN by admin {} (QR)", admin.id);
        let note = note.filter(|n| !n.trim().is_empty()).unwrap_or(&default_note);
        let entry = self.ledger.credit(record.owner_id, amount, note)?;
        let balance = self.ledger.balance_of(record.owner_id)?;

        let warning = match self.redemption.claim(token, admin.id) {
            Ok(_) => None,
            Err(err) => {
                warn!(
                    "[gk-06] ⚠️ credited owner {} but failed to mark token used: {}",
                    record.owner_id, err
                );
                Some(WARN_QR_USED_MARK_FAILED)
            }
        };

        Ok(CreditByQrResponse {
            owner_id: record.owner_id,
            entry,
            balance,
            warning,
        })
    }

    /// Debit `amount` points from `target_id` (admin only).
    ///
    /// Debits for the same owner are serialized through a per-owner lock so
    /// the balance check and the append act as one step in-process.
    pub fn admin_debit(
        &self,
        init_data: &str,
        target_id: OwnerId,
        amount: i64,
        note: Option<&str>,
    ) -> Result<DebitResponse, AppError> {
        let admin = self.verify_admin(init_data)?;
        let default_note = format!("SPEND by admin {}", admin.id);
        let note = note.filter(|n| !n.trim().is_empty()).unwrap_or(&default_note);

        let lock = self.owner_lock(target_id)?;
        let _serialized = lock
            .lock()
            .map_err(|_| AppError::Profile(ProfileStoreError::LockPoisoned))?;
        let entry = self.ledger.debit(target_id, amount, note)?;
        let balance = self.ledger.balance_of(target_id)?;
        Ok(DebitResponse { entry, balance })
    }

    /// Record an order against a presented QR payload or an explicit owner
    /// id (admin only). A non-empty payload wins over the id and is always
    /// consumed; the id is only consulted when no payload was presented.
    pub fn record_order(
        &self,
        init_data: &str,
        target_id: Option<OwnerId>,
        qr_payload: Option<&str>,
        amount: f64,
    ) -> Result<RecordOrderResponse, AppError> {
        let admin = self.verify_admin(init_data)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::Order(OrderError::BadOrderAmount));
        }
        let payload = qr_payload.map(str::trim).filter(|p| !p.is_empty());
        let target = match (payload, target_id) {
            (Some(payload), _) => OrderTarget::QrPayload(payload.to_string()),
            (None, Some(id)) if id > 0 => OrderTarget::Owner(id),
            _ => return Err(AppError::NoTarget),
        };

        let receipt = self.orders.place_order(target, amount, admin.id)?;
        let owner_id = receipt.order.owner_id;
        let spend_after = self.orders.total_spend_of(owner_id)?;
        Ok(RecordOrderResponse {
            spend_before: spend_after - receipt.order.amount,
            spend_after,
            tier_name: receipt.tier_name,
            cashback_points: receipt.order.cashback_points,
            order: receipt.order,
            warning: receipt.warning,
        })
    }
}
