//! # Redemption Flows
//!
//! Issue → claim choreography under concurrency and clock movement.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use gk_02_redemption::{
        InMemoryTokenStore, RedemptionError, RedemptionTokenService, TokenStore,
    };
    use shared_types::{FixedTimeSource, TimeSource};

    fn service() -> (Arc<RedemptionTokenService>, Arc<FixedTimeSource>) {
        let clock = Arc::new(FixedTimeSource::new(1_000));
        let svc = Arc::new(RedemptionTokenService::new(
            Arc::new(InMemoryTokenStore::new()),
            Arc::clone(&clock) as Arc<dyn TimeSource>,
        ));
        (svc, clock)
    }

    #[test]
    fn test_k_concurrent_claims_have_exactly_one_winner() {
        let (svc, _) = service();
        let issued = svc.issue(7).unwrap();

        let handles: Vec<_> = (0..16)
            .map(|admin| {
                let svc = Arc::clone(&svc);
                let token = issued.token.clone();
                thread::spawn(move || svc.claim(&token, admin))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        for lost in results.iter().filter(|r| r.is_err()) {
            assert_eq!(lost.clone().unwrap_err(), RedemptionError::AlreadyUsed);
        }
    }

    #[test]
    fn test_expiry_is_observed_through_the_injected_clock() {
        let (svc, clock) = service();
        let issued = svc.issue(7).unwrap();

        clock.set(issued.expires_at); // still claimable at the boundary
        assert!(svc.peek(&issued.token).is_ok());

        clock.advance(1);
        assert_eq!(svc.claim(&issued.token, 99).unwrap_err(), RedemptionError::Expired);
    }

    #[test]
    fn test_reissue_invalidates_the_previous_token() {
        let (svc, _) = service();
        let first = svc.issue(7).unwrap();
        let second = svc.issue(7).unwrap();

        assert_eq!(svc.claim(&first.token, 99).unwrap_err(), RedemptionError::NotFound);
        assert_eq!(svc.claim(&second.token, 99).unwrap().owner_id, 7);
    }

    #[test]
    fn test_tokens_are_unique_across_owners_and_issues() {
        let (svc, _) = service();
        let mut seen = std::collections::HashSet::new();
        for owner in 1..=50 {
            let issued = svc.issue(owner).unwrap();
            assert!(seen.insert(issued.token), "duplicate token issued");
        }
    }

    #[test]
    fn test_claimed_token_survives_owner_reissue_cleanup() {
        // Claimed tokens are audit data; issuing again must not delete them.
        let store = Arc::new(InMemoryTokenStore::new());
        let clock = Arc::new(FixedTimeSource::new(1_000));
        let svc = RedemptionTokenService::new(
            Arc::clone(&store) as Arc<dyn TokenStore>,
            clock as Arc<dyn TimeSource>,
        );

        let first = svc.issue(7).unwrap();
        svc.claim(&first.token, 99).unwrap();
        svc.issue(7).unwrap();

        let kept = store.find(&first.token).unwrap().unwrap();
        assert_eq!(kept.used_by_admin, Some(99));
    }
}
