use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "alice@ward.org".to_owned(),
        is_active: true,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(sample_user()), loading: false };
    assert!(!should_redirect_unauth(&state));
}
