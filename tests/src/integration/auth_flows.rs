//! # Authentication Flows
//!
//! Full-path verification: assertions signed the way the platform signs them,
//! fed through the facade, including tampering and freshness.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gk_01_identity::testkit::sign_init_data;
    use gk_01_identity::{AuthConfig, AuthError, IdentityVerifier};
    use gk_06_app::{App, AppError};
    use shared_types::{FixedTimeSource, TimeSource};

    const SECRET: &[u8] = b"integration-secret";

    fn signed(pairs: &[(&str, &str)]) -> String {
        sign_init_data(pairs, SECRET)
    }

    fn user_json(id: i64) -> String {
        format!(r#"{{"id":{id},"first_name":"Ann","username":"ann{id}"}}"#)
    }

    #[test]
    fn test_valid_assertion_is_accepted_end_to_end() {
        let clock: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(1_000));
        let app = App::in_memory(AuthConfig::new(SECRET, ""), clock);
        let user = user_json(42);
        let init = signed(&[("user", &user), ("auth_date", "1700000000")]);

        let me = app.me(&init).unwrap();
        assert_eq!(me.identity.id, 42);
        assert_eq!(me.identity.username.as_deref(), Some("ann42"));
    }

    #[test]
    fn test_any_single_character_tamper_is_rejected() {
        let clock: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(1_000));
        let app = App::in_memory(AuthConfig::new(SECRET, ""), clock);
        let user = user_json(42);
        let init = signed(&[("user", &user), ("auth_date", "1700000000")]);

        // Flip each character of the signed blob in turn; every mutation that
        // actually changes the string must fail verification.
        for (i, original) in init.char_indices() {
            let replacement = if original == 'x' { 'y' } else { 'x' };
            let mut tampered = init.clone();
            tampered.replace_range(i..i + original.len_utf8(), &replacement.to_string());
            if tampered == init {
                continue;
            }
            assert!(
                app.me(&tampered).is_err(),
                "tamper at byte {i} was accepted"
            );
        }
    }

    #[test]
    fn test_wrong_secret_fails_signature() {
        let clock: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(1_000));
        let app = App::in_memory(AuthConfig::new(b"another-secret".as_slice(), ""), clock);
        let user = user_json(42);
        let init = signed(&[("user", &user), ("auth_date", "1700000000")]);
        assert_eq!(app.me(&init).unwrap_err(), AppError::Auth(AuthError::BadSignature));
    }

    #[test]
    fn test_freshness_window_rejects_old_assertions() {
        // auth_date is unix seconds; the clock is unix milliseconds.
        let auth_date = 1_700_000_000u64;
        let now_ms = (auth_date + 3_600) * 1_000; // one hour later
        let clock: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(now_ms));
        let config = AuthConfig::new(SECRET, "").with_max_auth_age(600);
        let verifier = IdentityVerifier::new(config, clock);

        let user = user_json(42);
        let date = auth_date.to_string();
        let init = signed(&[("user", &user), ("auth_date", &date)]);
        assert_eq!(verifier.verify(&init).unwrap_err(), AuthError::Stale);
    }

    #[test]
    fn test_no_freshness_window_by_default() {
        let clock: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(u64::MAX / 2));
        let verifier = IdentityVerifier::new(AuthConfig::new(SECRET, ""), clock);
        let user = user_json(42);
        let init = signed(&[("user", &user), ("auth_date", "1")]);
        assert!(verifier.verify(&init).is_ok());
    }

    #[test]
    fn test_admin_policy_is_exact_string_match() {
        let clock: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(1_000));
        let app = App::in_memory(AuthConfig::new(SECRET, " 99 , 150 ,"), clock);

        let admin_user = user_json(99);
        let admin = signed(&[("user", &admin_user), ("auth_date", "1700000000")]);
        assert!(app.me(&admin).unwrap().is_admin);

        let other_user = user_json(7);
        let other = signed(&[("user", &other_user), ("auth_date", "1700000000")]);
        assert!(!app.me(&other).unwrap().is_admin);
    }
}
