//! JWT creation and verification for session cookies.
//!
//! ARCHITECTURE
//! ============
//! Both cookies carry HS256 JWTs signed with the configured secret; they
//! differ only in lifetime. The refresh token is additionally pinned to
//! the hash stored on the user row, so rotation invalidates older ones.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, get_current_timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("invalid or expired token")]
    Invalid,
}

/// Claims carried by both access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Login email at issue time.
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: u64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
}

fn create_token(secret: &str, user_id: Uuid, email: &str, ttl_secs: u64) -> Result<String, TokenError> {
    let now = get_current_timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_owned(),
        iat: now,
        exp: now + ttl_secs,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

/// Mint an access token for the authenticated user.
///
/// # Errors
///
/// Returns `TokenError::Encode` if signing fails.
pub fn create_access_token(config: &Config, user_id: Uuid, email: &str) -> Result<String, TokenError> {
    create_token(&config.secret_key, user_id, email, config.access_token_ttl_secs())
}

/// Mint a refresh token for the authenticated user.
///
/// # Errors
///
/// Returns `TokenError::Encode` if signing fails.
pub fn create_refresh_token(config: &Config, user_id: Uuid, email: &str) -> Result<String, TokenError> {
    create_token(&config.secret_key, user_id, email, config.refresh_token_ttl_secs())
}

/// Verify a token's signature and expiry, returning its claims.
///
/// # Errors
///
/// Returns `TokenError::Invalid` for bad signatures, malformed tokens,
/// and expired tokens alike.
pub fn verify_token(config: &Config, token: &str) -> Result<Claims, TokenError> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret_key.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| TokenError::Invalid)
}
