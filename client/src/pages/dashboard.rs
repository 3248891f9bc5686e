//! Dashboard page shown to authenticated users.
//!
//! The route itself is gated by `util::guard::RequireSession`; this page
//! additionally loads the user profile for the header and installs the
//! shared unauthenticated-redirect so a session that dies between the
//! guard probe and the profile fetch still lands on `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::auth::{AuthState, should_redirect_unauth};

fn greeting_line(user: &User) -> String {
    format!("Signed in as {}", user.email)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new({
        let navigate = navigate.clone();
        move || {
            if should_redirect_unauth(&auth.get()) {
                navigate("/login", NavigateOptions::default());
            }
        }
    });

    // Profile fetch for the header; distinct from the guard probe, which
    // never reads a body.
    let profile = LocalResource::new(|| crate::net::api::fetch_current_user());

    Effect::new(move || {
        if let Some(user) = profile.get() {
            auth.set(AuthState { user, loading: false });
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Appointments"</h1>
                <div class="dashboard-page__session">
                    <Suspense fallback=move || view! { <span>"Loading profile..."</span> }>
                        {move || {
                            profile
                                .get()
                                .map(|maybe_user| match maybe_user {
                                    Some(user) => view! {
                                        <span class="dashboard-page__user">{greeting_line(&user)}</span>
                                    }
                                        .into_any(),
                                    None => view! {
                                        <span class="dashboard-page__user">"Session expired."</span>
                                    }
                                        .into_any(),
                                })
                        }}
                    </Suspense>
                    <button class="btn" on:click=on_logout>
                        "Sign Out"
                    </button>
                </div>
            </header>

            <section class="dashboard-page__body">
                <p class="dashboard-page__empty">"No appointments scheduled."</p>
            </section>
        </div>
    }
}
