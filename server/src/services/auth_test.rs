use super::*;

#[test]
fn hashed_password_verifies() {
    let hash = hash_password("correct-horse").unwrap();
    assert!(verify_password("correct-horse", &hash));
}

#[test]
fn wrong_password_does_not_verify() {
    let hash = hash_password("correct-horse").unwrap();
    assert!(!verify_password("battery-staple", &hash));
}

#[test]
fn malformed_stored_hash_counts_as_mismatch() {
    assert!(!verify_password("anything", "not-a-bcrypt-hash"));
}

#[test]
fn hashing_is_salted() {
    let a = hash_password("correct-horse").unwrap();
    let b = hash_password("correct-horse").unwrap();
    assert_ne!(a, b);
}

#[test]
fn refresh_token_hash_is_hex_sha256() {
    let hash = hash_refresh_token("some-token");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn refresh_token_hash_is_deterministic() {
    assert_eq!(hash_refresh_token("tok"), hash_refresh_token("tok"));
    assert_ne!(hash_refresh_token("tok"), hash_refresh_token("tok2"));
}
