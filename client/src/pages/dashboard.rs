//! Placeholder dashboard for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route after login or signup. It is gated: without a
//! session user it redirects to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page: greets the user and offers sign-out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    // Clearing the session trips the redirect effect above.
    let on_sign_out = move |_| auth.update(AuthState::sign_out);

    view! {
        <Show
            when=move || auth.with(AuthState::is_signed_in)
            fallback=|| {
                view! {
                    <div class="dashboard-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Dashboard"</h1>
                    <span class="dashboard-page__greeting">{move || auth.with(greeting)}</span>
                    <button class="btn dashboard-page__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </header>
                <p class="dashboard-page__placeholder">"Nothing to track yet."</p>
            </div>
        </Show>
    }
}

fn greeting(state: &AuthState) -> String {
    match &state.user {
        Some(user) => format!("Welcome, {}", user.greeting_name()),
        None => "Welcome".to_owned(),
    }
}
