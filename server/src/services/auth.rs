//! Credential verification and user lookup.
//!
//! ERROR HANDLING
//! ==============
//! An unknown email and a wrong password both surface as
//! `AuthError::InvalidCredentials`; callers cannot tell which field was
//! wrong.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// User row as stored in the `users` table.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

fn record_from_row(row: &sqlx::postgres::PgRow) -> UserRecord {
    UserRecord {
        id: row.get("id"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        is_active: row.get("is_active"),
        is_superuser: row.get("is_superuser"),
    }
}

/// Hash a plaintext password for storage.
///
/// # Errors
///
/// Returns `AuthError::Hash` if bcrypt fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a plaintext password against its stored hash. A malformed
/// stored hash counts as a mismatch.
#[must_use]
pub fn verify_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}

/// Refresh tokens are stored hashed so a leaked table does not yield
/// usable tokens.
#[must_use]
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Look up a user by lowercased email.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, email, password_hash, is_active, is_superuser FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| record_from_row(&r)))
}

/// Look up a user by id.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, email, password_hash, is_active, is_superuser FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| record_from_row(&r)))
}

/// Validate credentials and return the user row if they match.
pub async fn authenticate_user(pool: &PgPool, email: &str, password: &str) -> Result<UserRecord, AuthError> {
    let Some(user) = find_by_email(pool, email).await? else {
        return Err(AuthError::InvalidCredentials);
    };
    if !verify_password(password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(user)
}

/// Create a user with a freshly hashed password, returning its id.
pub async fn create_user(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let id = Uuid::new_v4();
    let password_hash = hash_password(password)?;
    sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(email)
        .bind(&password_hash)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Persist the hash of the user's current refresh token.
pub async fn store_refresh_token(pool: &PgPool, user_id: Uuid, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET refresh_token_hash = $1 WHERE id = $2")
        .bind(hash_refresh_token(token))
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Whether the presented refresh token matches the stored hash for the
/// user.
pub async fn refresh_token_matches(pool: &PgPool, user_id: Uuid, token: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT refresh_token_hash FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    let stored: Option<String> = match row {
        Some(r) => r.get("refresh_token_hash"),
        None => return Ok(false),
    };
    Ok(stored.is_some_and(|hash| hash == hash_refresh_token(token)))
}

/// Seed a demo account for local development. Idempotent.
pub async fn seed_demo_user(pool: &PgPool) -> Result<(), AuthError> {
    let id = Uuid::new_v4();
    let password_hash = hash_password("password123")?;
    sqlx::query(
        "INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(id)
    .bind("admin@example.com")
    .bind(&password_hash)
    .execute(pool)
    .await?;
    Ok(())
}
