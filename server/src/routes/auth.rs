//! Auth routes — login, current-user, refresh, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SPA cannot read the session cookies (httpOnly), so its route
//! guard probes `GET /api/auth/me` before entering the dashboard. These
//! handlers own the cookie lifecycle: login sets the access + refresh
//! pair, refresh rotates the access cookie, logout expires both.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;
use uuid::Uuid;

use crate::services::{auth as auth_svc, token};
use crate::state::AppState;

const ACCESS_COOKIE: &str = "access_token";
const REFRESH_COOKIE: &str = "refresh_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Whether session cookies carry the `Secure` attribute. An explicit
/// `COOKIE_SECURE` wins; otherwise inferred from the `PUBLIC_URL` scheme.
pub(crate) fn cookie_secure_from(explicit: Option<bool>, public_url: Option<&str>) -> bool {
    match explicit {
        Some(value) => value,
        None => public_url.is_some_and(|url| url.starts_with("https://")),
    }
}

pub(crate) fn cookie_secure() -> bool {
    let public_url = std::env::var("PUBLIC_URL").ok();
    cookie_secure_from(env_bool("COOKIE_SECURE"), public_url.as_deref())
}

// =============================================================================
// PAYLOAD VALIDATION
// =============================================================================

/// Normalize a login email: trimmed, lowercased, one `@` with non-empty
/// sides. Mirrors the client-side rules.
pub(crate) fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Password rules: non-blank and at least 8 characters.
pub(crate) fn password_ok(password: &str) -> bool {
    !password.trim().is_empty() && password.len() >= 8
}

// =============================================================================
// COOKIES
// =============================================================================

pub(crate) fn auth_cookie(name: &'static str, value: String, max_age_secs: u64, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(i64::try_from(max_age_secs).unwrap_or(i64::MAX)))
        .build()
}

pub(crate) fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the access-token cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: auth_svc::UserRecord,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(ACCESS_COOKIE).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let claims = token::verify_token(&app_state.config, token).map_err(|_| StatusCode::UNAUTHORIZED)?;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| StatusCode::UNAUTHORIZED)?;

        let user = auth_svc::find_by_id(&app_state.pool, user_id)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::NOT_FOUND)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for `GET /api/auth/me`.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
}

impl From<auth_svc::UserRecord> for UserInfo {
    fn from(user: auth_svc::UserRecord) -> Self {
        Self { id: user.id, email: user.email, is_active: user.is_active }
    }
}

/// `POST /api/auth/login` — verify credentials, set session cookies.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let Some(email) = normalize_email(&body.email) else {
        return (StatusCode::UNPROCESSABLE_ENTITY, "invalid email").into_response();
    };
    if !password_ok(&body.password) {
        return (StatusCode::UNPROCESSABLE_ENTITY, "invalid password").into_response();
    }

    let user = match auth_svc::authenticate_user(&state.pool, &email, &body.password).await {
        Ok(user) => user,
        Err(auth_svc::AuthError::InvalidCredentials) => {
            return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "login failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let access = match token::create_access_token(&state.config, user.id, &user.email) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "access token creation failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let refresh = match token::create_refresh_token(&state.config, user.id, &user.email) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "refresh token creation failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Err(e) = auth_svc::store_refresh_token(&state.pool, user.id, &refresh).await {
        tracing::error!(error = %e, "refresh token persistence failed");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let secure = cookie_secure();
    let jar = CookieJar::new()
        .add(auth_cookie(ACCESS_COOKIE, access, state.config.access_token_ttl_secs(), secure))
        .add(auth_cookie(REFRESH_COOKIE, refresh, state.config.refresh_token_ttl_secs(), secure));

    (jar, Json(serde_json::json!({ "message": "Login successful" }))).into_response()
}

/// `GET /api/auth/me` — return the current user. The SPA route guard
/// only inspects the status; the body serves user-aware rendering.
pub async fn me(auth: AuthUser) -> Json<UserInfo> {
    Json(auth.user.into())
}

/// `GET /api/auth/refresh` — mint a fresh access cookie from a valid
/// refresh cookie.
pub async fn refresh(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token_value = jar.get(REFRESH_COOKIE).map(Cookie::value).unwrap_or_default();
    if token_value.is_empty() {
        return (StatusCode::UNAUTHORIZED, "No refresh token provided").into_response();
    }

    let Ok(claims) = token::verify_token(&state.config, token_value) else {
        return (StatusCode::UNAUTHORIZED, "Invalid or expired refresh token").into_response();
    };
    let Ok(user_id) = Uuid::parse_str(&claims.sub) else {
        return (StatusCode::UNAUTHORIZED, "Invalid or expired refresh token").into_response();
    };

    // A rotated-out refresh token verifies but no longer matches the
    // stored hash.
    match auth_svc::refresh_token_matches(&state.pool, user_id, token_value).await {
        Ok(true) => {}
        Ok(false) => {
            return (StatusCode::UNAUTHORIZED, "Invalid or expired refresh token").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "refresh token lookup failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    let access = match token::create_access_token(&state.config, user_id, &claims.email) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "access token creation failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let secure = cookie_secure();
    let jar = CookieJar::new().add(auth_cookie(
        ACCESS_COOKIE,
        access,
        state.config.access_token_ttl_secs(),
        secure,
    ));

    (jar, Json(serde_json::json!({ "message": "Token refreshed successfully" }))).into_response()
}

/// `POST /api/auth/logout` — expire both session cookies.
pub async fn logout() -> impl IntoResponse {
    let secure = cookie_secure();
    let jar = CookieJar::new()
        .add(expired_cookie(ACCESS_COOKIE, secure))
        .add(expired_cookie(REFRESH_COOKIE, secure));

    (jar, Json(serde_json::json!({ "message": "Logged out successfully" })))
}
