use super::*;

fn test_config(secret: &str) -> Config {
    Config {
        database_url: "postgres://localhost/test".to_owned(),
        port: 3000,
        secret_key: secret.to_owned(),
        access_token_expire_minutes: 30,
        refresh_token_expire_days: 14,
        cors_origin: "http://localhost:3000".to_owned(),
    }
}

#[test]
fn access_token_round_trips() {
    let config = test_config("unit-test-secret");
    let user_id = Uuid::new_v4();
    let token = create_access_token(&config, user_id, "a@b.com").unwrap();
    let claims = verify_token(&config, &token).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "a@b.com");
    assert!(claims.exp > claims.iat);
}

#[test]
fn refresh_token_outlives_access_token() {
    let config = test_config("unit-test-secret");
    let user_id = Uuid::new_v4();
    let access = create_access_token(&config, user_id, "a@b.com").unwrap();
    let refresh = create_refresh_token(&config, user_id, "a@b.com").unwrap();
    let access_claims = verify_token(&config, &access).unwrap();
    let refresh_claims = verify_token(&config, &refresh).unwrap();
    assert!(refresh_claims.exp > access_claims.exp);
}

#[test]
fn wrong_secret_is_rejected() {
    let config = test_config("secret-a");
    let other = test_config("secret-b");
    let token = create_access_token(&config, Uuid::new_v4(), "a@b.com").unwrap();
    assert!(matches!(verify_token(&other, &token), Err(TokenError::Invalid)));
}

#[test]
fn garbage_token_is_rejected() {
    let config = test_config("unit-test-secret");
    assert!(matches!(verify_token(&config, "not.a.jwt"), Err(TokenError::Invalid)));
}

#[test]
fn expired_token_is_rejected() {
    let config = test_config("unit-test-secret");
    // Backdate past the default 60s validation leeway.
    let now = get_current_timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "a@b.com".to_owned(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret_key.as_bytes()),
    )
    .unwrap();
    assert!(matches!(verify_token(&config, &token), Err(TokenError::Invalid)));
}
