use super::*;

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(
        normalize_email("  Nurse@Ward.ORG  "),
        Ok("nurse@ward.org".to_owned())
    );
}

#[test]
fn normalize_email_rejects_malformed_addresses() {
    assert!(normalize_email("").is_err());
    assert!(normalize_email("no-at-sign").is_err());
    assert!(normalize_email("@ward.org").is_err());
    assert!(normalize_email("nurse@").is_err());
    assert!(normalize_email("a@b@c").is_err());
}

#[test]
fn validate_password_rejects_blank_values() {
    assert_eq!(validate_password(""), Err("Password must not be empty."));
    assert_eq!(validate_password("        "), Err("Password must not be empty."));
}

#[test]
fn validate_password_enforces_minimum_length() {
    assert_eq!(
        validate_password("short"),
        Err("Password must be at least 8 characters long.")
    );
    assert_eq!(validate_password("longenough"), Ok(()));
}

#[test]
fn validate_login_input_returns_normalized_pair() {
    assert_eq!(
        validate_login_input(" Admin@Clinic.com ", "correct-horse"),
        Ok(("admin@clinic.com".to_owned(), "correct-horse".to_owned()))
    );
}

#[test]
fn validate_login_input_surfaces_first_failure() {
    assert!(validate_login_input("bad", "correct-horse").is_err());
    assert!(validate_login_input("a@b.com", "short").is_err());
}
