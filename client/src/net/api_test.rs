use super::*;

#[test]
fn login_failed_message_is_friendly_for_bad_credentials() {
    assert_eq!(login_failed_message(401), "Invalid email or password.");
}

#[test]
fn login_failed_message_formats_other_statuses() {
    assert_eq!(login_failed_message(500), "login failed: 500");
    assert_eq!(login_failed_message(422), "login failed: 422");
}

#[test]
fn session_probe_variants_are_comparable() {
    assert_eq!(SessionProbe::Rejected(401), SessionProbe::Rejected(401));
    assert_ne!(SessionProbe::Rejected(401), SessionProbe::Rejected(403));
    assert_ne!(SessionProbe::Authenticated, SessionProbe::Unreachable);
}
