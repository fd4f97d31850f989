//! # Loyalty Flows
//!
//! Orders, cashback tiers, credits and debits exercised through the facade
//! exactly as a transport layer would drive them.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use gk_01_identity::testkit::sign_init_data;
    use gk_01_identity::{AuthConfig, IdentityVerifier};
    use gk_02_redemption::{
        InMemoryTokenStore, RedemptionToken, RedemptionTokenService, TokenStore, TokenStoreError,
    };
    use gk_03_ledger::{InMemoryLedgerStore, LedgerService};
    use gk_04_cashback::TierTable;
    use gk_05_orders::{InMemoryOrderStore, OrderService};
    use gk_06_app::{ApiEnvelope, App, AppError, InMemoryProfileStore, WARN_QR_USED_MARK_FAILED};
    use shared_types::{FixedTimeSource, OwnerId, TimeSource, Timestamp};

    const SECRET: &[u8] = b"loyalty-secret";
    const ADMIN_ID: OwnerId = 99;

    fn init_data_for(id: OwnerId) -> String {
        let user = format!(r#"{{"id":{id},"first_name":"T"}}"#);
        sign_init_data(&[("user", &user), ("auth_date", "1700000000")], SECRET)
    }

    fn app() -> App {
        let clock: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(1_000));
        App::in_memory(AuthConfig::new(SECRET, "99"), clock)
    }

    #[test]
    fn test_rookie_order_of_200_earns_6_points_end_to_end() {
        let app = app();
        let admin = init_data_for(ADMIN_ID);
        let customer = init_data_for(7);

        let issued = app.issue_qr_token(&customer).unwrap();
        let resp = app
            .record_order(&admin, None, Some(&issued.payload), 200.0)
            .unwrap();

        assert_eq!(resp.tier_name, "Rookie");
        assert_eq!(resp.cashback_points, 6);

        let me = app.me(&customer).unwrap();
        assert_eq!(me.balance, 6);
        assert_eq!(me.total_spend, 200.0);

        let txs = app.transactions(&customer, None).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].amount, 6);
    }

    #[test]
    fn test_order_crossing_a_tier_boundary_earns_at_the_old_rate() {
        let app = app();
        let admin = init_data_for(ADMIN_ID);

        app.record_order(&admin, Some(7), None, 9_999.0).unwrap();
        let crossing = app.record_order(&admin, Some(7), None, 50.0).unwrap();
        assert_eq!(crossing.tier_name, "Rookie");
        assert_eq!(crossing.order.cashback_percent, 0.03);
        assert_eq!(crossing.spend_before, 9_999.0);

        let after = app.record_order(&admin, Some(7), None, 100.0).unwrap();
        assert_eq!(after.tier_name, "Pro");
        assert_eq!(after.order.cashback_percent, 0.05);
    }

    #[test]
    fn test_me_reports_tier_progress_from_cumulative_spend() {
        let app = app();
        let admin = init_data_for(ADMIN_ID);
        app.record_order(&admin, Some(7), None, 15_000.0).unwrap();

        let me = app.me(&init_data_for(7)).unwrap();
        assert_eq!(me.tier.name, "Pro");
        let next = me.progress.next.unwrap();
        assert_eq!(next.name, "Elite");
        assert_eq!(me.progress.remaining, 15_000.0);
    }

    #[test]
    fn test_concurrent_debits_never_overdraw() {
        let app = Arc::new(app());
        let admin = init_data_for(ADMIN_ID);
        app.admin_credit(&admin, 7, 100, None).unwrap();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let app = Arc::clone(&app);
                let admin = admin.clone();
                thread::spawn(move || app.admin_debit(&admin, 7, 30, None).is_ok())
            })
            .collect();

        let succeeded = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();

        // 100 points fund exactly three 30-point debits.
        assert_eq!(succeeded, 3);
        assert_eq!(app.me(&init_data_for(7)).unwrap().balance, 10);
    }

    #[test]
    fn test_over_debit_leaves_the_ledger_untouched() {
        let app = app();
        let admin = init_data_for(ADMIN_ID);
        app.admin_credit(&admin, 7, 30, None).unwrap();

        let err = app.admin_debit(&admin, 7, 31, None).unwrap_err();
        assert_eq!(err.code(), "INSUFFICIENT_FUNDS");
        assert_eq!(app.me(&init_data_for(7)).unwrap().balance, 30);
        assert_eq!(app.transactions(&init_data_for(7), None).unwrap().len(), 1);
    }

    #[test]
    fn test_expired_token_aborts_credit_and_order() {
        let clock = Arc::new(FixedTimeSource::new(1_000));
        let app = App::in_memory(
            AuthConfig::new(SECRET, "99"),
            Arc::clone(&clock) as Arc<dyn TimeSource>,
        );
        let admin = init_data_for(ADMIN_ID);
        let issued = app.issue_qr_token(&init_data_for(7)).unwrap();

        clock.set(issued.expires_at + 1);

        let credit_err = app
            .admin_credit_by_qr(&admin, &issued.payload, 50, None)
            .unwrap_err();
        assert_eq!(credit_err.code(), "QR_EXPIRED");

        let order_err = app
            .record_order(&admin, None, Some(&issued.payload), 50.0)
            .unwrap_err();
        assert_eq!(order_err.code(), "QR_EXPIRED");

        assert_eq!(app.me(&init_data_for(7)).unwrap().balance, 0);
    }

    /// Store whose conditional claim always fails, simulating a backend that
    /// dies between the credit and the mark-used write.
    struct ClaimFailingStore {
        inner: InMemoryTokenStore,
    }

    impl TokenStore for ClaimFailingStore {
        fn insert(&self, token: RedemptionToken) -> Result<(), TokenStoreError> {
            self.inner.insert(token)
        }
        fn find(&self, token: &str) -> Result<Option<RedemptionToken>, TokenStoreError> {
            self.inner.find(token)
        }
        fn delete_unclaimed_for_owner(&self, owner_id: OwnerId) -> Result<u64, TokenStoreError> {
            self.inner.delete_unclaimed_for_owner(owner_id)
        }
        fn claim_if_unclaimed(
            &self,
            _token: &str,
            _admin_id: OwnerId,
            _used_at_ms: Timestamp,
        ) -> Result<bool, TokenStoreError> {
            Err(TokenStoreError::Backend("connection reset".into()))
        }
    }

    #[test]
    fn test_credit_by_qr_degrades_to_warning_when_mark_used_fails() {
        let clock: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(1_000));
        let verifier = IdentityVerifier::new(AuthConfig::new(SECRET, "99"), Arc::clone(&clock));
        let redemption = Arc::new(RedemptionTokenService::new(
            Arc::new(ClaimFailingStore {
                inner: InMemoryTokenStore::new(),
            }),
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
        let app = App::new(
            verifier,
            Arc::clone(&redemption),
            ledger,
            orders,
            Arc::new(InMemoryProfileStore::new()),
            clock,
        );

        let issued = app.issue_qr_token(&init_data_for(7)).unwrap();
        let resp = app
            .admin_credit_by_qr(&init_data_for(ADMIN_ID), &issued.payload, 50, None)
            .unwrap();

        // The points landed; the broken mark-used is reported, not fatal.
        assert_eq!(resp.balance, 50);
        assert_eq!(resp.warning, Some(WARN_QR_USED_MARK_FAILED));
    }

    #[test]
    fn test_registration_then_me_round_trip() {
        let app = app();
        let customer = init_data_for(7);
        assert!(app.me(&customer).unwrap().needs_registration);

        app.register(&customer, "Ann Lee", "+12345678", true).unwrap();

        let me = app.me(&customer).unwrap();
        assert!(!me.needs_registration);
        assert_eq!(me.profile.unwrap().name, "Ann Lee");
    }

    #[test]
    fn test_wire_envelope_end_to_end() -> anyhow::Result<()> {
        gk_06_app::init_tracing();
        let app = app();
        let admin = init_data_for(ADMIN_ID);

        let env = ApiEnvelope::from_result(app.admin_credit(&admin, 7, 100, None));
        let v = serde_json::to_value(&env)?;
        assert_eq!(v["ok"], serde_json::json!(true));
        assert_eq!(v["balance"], serde_json::json!(100));
        assert_eq!(v["entry"]["kind"], serde_json::json!("EARN"));

        let env = ApiEnvelope::from_result(app.admin_debit(&admin, 7, 500, None));
        let v = serde_json::to_value(&env)?;
        assert_eq!(v["ok"], serde_json::json!(false));
        assert_eq!(v["error"], serde_json::json!("INSUFFICIENT_FUNDS"));
        assert!(v["details"].is_string());
        Ok(())
    }

    #[test]
    fn test_error_codes_survive_the_facade() {
        let app = app();
        let admin = init_data_for(ADMIN_ID);
        assert_eq!(
            app.admin_credit(&admin, 7, 0, None).unwrap_err().code(),
            "BAD_AMOUNT"
        );
        assert_eq!(
            app.record_order(&admin, Some(7), None, -1.0).unwrap_err().code(),
            "BAD_ORDER_AMOUNT"
        );
        assert_eq!(
            app.admin_credit_by_qr(&admin, "not-a-payload", 5, None)
                .unwrap_err()
                .code(),
            "BAD_QR"
        );
        assert_eq!(
            app.admin_credit(&init_data_for(7), 8, 5, None).unwrap_err(),
            AppError::Forbidden
        );
    }
}
