use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_9823__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_42__"), None);
}

#[test]
fn cookie_secure_explicit_setting_wins_over_url() {
    assert!(cookie_secure_from(Some(true), Some("http://localhost:3000")));
    assert!(!cookie_secure_from(Some(false), Some("https://scheduler.example.com")));
}

#[test]
fn cookie_secure_inferred_from_public_url_scheme() {
    assert!(cookie_secure_from(None, Some("https://scheduler.example.com")));
    assert!(!cookie_secure_from(None, Some("http://localhost:3000")));
}

#[test]
fn cookie_secure_defaults_off_when_nothing_is_set() {
    assert!(!cookie_secure_from(None, None));
}

// Exercises the env-reading wrapper itself. COOKIE_SECURE is a fixed
// key; no other test touches it, so this stays race-free.
#[test]
fn cookie_secure_reads_the_environment_override() {
    unsafe { std::env::set_var("COOKIE_SECURE", "on") };
    assert!(cookie_secure());
    unsafe { std::env::remove_var("COOKIE_SECURE") };
}

// =============================================================================
// Payload validation
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(
        normalize_email("  Desk@Clinic.COM "),
        Some("desk@clinic.com".to_owned())
    );
}

#[test]
fn normalize_email_rejects_malformed_addresses() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("no-at-sign"), None);
    assert_eq!(normalize_email("@clinic.com"), None);
    assert_eq!(normalize_email("desk@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

#[test]
fn password_ok_rejects_blank_and_short_values() {
    assert!(!password_ok(""));
    assert!(!password_ok("        "));
    assert!(!password_ok("short"));
    assert!(password_ok("longenough"));
}

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn auth_cookie_is_http_only_lax_and_scoped_to_root() {
    let cookie = auth_cookie(ACCESS_COOKIE, "tok".to_owned(), 1800, false);
    assert_eq!(cookie.name(), "access_token");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(false));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(1800)));
}

#[test]
fn auth_cookie_honors_secure_flag() {
    let cookie = auth_cookie(REFRESH_COOKIE, "tok".to_owned(), 60, true);
    assert_eq!(cookie.secure(), Some(true));
}

#[test]
fn expired_cookie_clears_value_immediately() {
    let cookie = expired_cookie(ACCESS_COOKIE, false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.http_only(), Some(true));
}

#[test]
fn user_info_mirrors_the_user_record() {
    let record = auth_svc::UserRecord {
        id: Uuid::new_v4(),
        email: "desk@clinic.com".to_owned(),
        password_hash: "$2b$not-a-real-hash".to_owned(),
        is_active: true,
        is_superuser: false,
    };
    let info = UserInfo::from(record.clone());
    assert_eq!(info.id, record.id);
    assert_eq!(info.email, "desk@clinic.com");
    assert!(info.is_active);
}
