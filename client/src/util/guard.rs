//! Session guard for the dashboard route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard is only meaningful for a signed-in user, but the session
//! lives in an httpOnly cookie the page scripts cannot read. The guard
//! therefore asks the server: every navigation into the guarded route
//! probes `GET /api/auth/me` and either renders the route or redirects
//! to `/login`. No retry, no timeout, no caching of the verdict.
//!
//! ERROR HANDLING
//! ==============
//! A rejected status and a transport failure collapse into the same
//! outcome: the user lands on `/login` either way.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::SessionProbe;
use crate::state::auth::AuthState;

/// Verdict of a session probe for a guarded navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Continue into the guarded route.
    Proceed,
    /// Abandon the navigation and go to `/login`.
    RedirectToLogin,
}

/// Map a session probe to a navigation verdict.
///
/// Only a 2xx response proceeds; rejected statuses and unreachable
/// servers are indistinguishable to the user.
#[must_use]
pub fn guard_outcome(probe: SessionProbe) -> GuardOutcome {
    match probe {
        SessionProbe::Authenticated => GuardOutcome::Proceed,
        SessionProbe::Rejected(_) | SessionProbe::Unreachable => GuardOutcome::RedirectToLogin,
    }
}

/// Redirect to `/login` whenever the guard verdict settles on redirect.
pub fn install_guard_redirect<F>(verdict: RwSignal<Option<GuardOutcome>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if verdict.get() == Some(GuardOutcome::RedirectToLogin) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Route wrapper that gates its children behind a server session check.
///
/// The component remounts on every navigation into the route, so the
/// probe runs again each time; a verdict is never reused.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let verdict = RwSignal::new(None::<GuardOutcome>);

    install_guard_redirect(verdict, use_navigate());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        auth.update(|state| state.loading = true);
        let probe = crate::net::api::probe_session().await;
        match probe {
            SessionProbe::Authenticated => log::debug!("session guard: user authenticated"),
            SessionProbe::Rejected(status) => {
                log::debug!("session guard: not authenticated ({status}), redirecting to login");
            }
            SessionProbe::Unreachable => {
                log::debug!("session guard: session check failed, redirecting to login");
            }
        }
        let outcome = guard_outcome(probe);
        if outcome == GuardOutcome::RedirectToLogin {
            auth.set(AuthState { user: None, loading: false });
        }
        verdict.set(Some(outcome));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <Show
            when=move || verdict.get() == Some(GuardOutcome::Proceed)
            fallback=|| view! { <p class="guard-pending">"Checking session..."</p> }
        >
            {children()}
        </Show>
    }
}
