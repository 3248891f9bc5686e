//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session state itself lives in an httpOnly cookie the page cannot
//! read; this struct only mirrors what the server last told us. The
//! route guard and user-aware components coordinate login redirects and
//! identity-dependent rendering through it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Whether a view should bounce to `/login`: auth has settled and no
/// user is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}
