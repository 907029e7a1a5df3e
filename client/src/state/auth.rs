//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Set by the login and signup pages after a successful API call and read by
//! the dashboard route guard. Held in memory only; a full page reload starts
//! signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// The signed-in user as known to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    /// Email address used to sign in.
    pub username: String,
    /// Display name, when the user supplied one at signup.
    pub display_name: Option<String>,
}

impl SessionUser {
    /// Name to greet the user with: the display name, else the username.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    /// Record a successful sign-in.
    pub fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
