//! Shared route-gating helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages behind sign-in apply identical unauthenticated redirect behavior,
//! and the auth forms share the post-sign-in landing route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where the auth forms send the user after a successful call.
pub const SIGNED_IN_ROUTE: &str = "/dashboard";

/// Where gated pages send a user with no session.
pub const SIGN_IN_ROUTE: &str = "/login";

/// Whether a gated page should bounce the user to the login screen.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_signed_in()
}

/// Redirect to `/login` whenever no user is signed in.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(SIGN_IN_ROUTE, NavigateOptions::default());
        }
    });
}
