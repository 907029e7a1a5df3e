//! Login page: email + password form posting to `user/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::copyright::Copyright;
use crate::components::form_alert::FormAlert;
use crate::components::text_field::TextField;
use crate::net::types::LoginRequest;
use crate::pages::fields;
use crate::state::auth::{AuthState, SessionUser};
use crate::state::form_input::{FormInput, use_form_input};
use crate::util::auth::SIGNED_IN_ROUTE;
use crate::util::submit::guarded_submit;

/// Login page. A successful sign-in stores the session and opens the dashboard.
///
/// The form is posted even when fields are invalid; the server decides.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = use_form_input("", fields::username_rules());
    let password = use_form_input("", fields::password_rules());
    let login_error = RwSignal::new(None::<String>);
    let processing = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = login_request(username, password);
        let call = async move { crate::net::api::login(&request).await.map(|()| request) };
        let navigate = navigate.clone();
        let Some(task) = guarded_submit("login", processing, login_error, call, move |request: LoginRequest| {
            auth.update(|a| {
                a.sign_in(SessionUser {
                    username: request.username,
                    display_name: None,
                });
            });
            navigate(SIGNED_IN_ROUTE, NavigateOptions::default());
        }) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(task);
        #[cfg(not(feature = "hydrate"))]
        drop(task);
    };

    view! {
        <div class="auth-page auth-page--login">
            <div class="auth-panel">
                <div class="auth-panel__heading">
                    <span class="auth-panel__avatar" aria-hidden="true">"🔒"</span>
                    <h1>"Sign in"</h1>
                </div>
                <form class="auth-form" novalidate=true autocomplete="off" on:submit=on_submit>
                    <FormAlert message=login_error/>
                    <TextField
                        input=username
                        label="Email Address"
                        name="email"
                        input_type="email"
                        autofocus=true
                    />
                    <TextField
                        input=password
                        label="Password"
                        name="password"
                        input_type="password"
                        autocomplete="current-password"
                    />
                    <label class="auth-form__remember">
                        <input type="checkbox" value="remember"/>
                        "Remember me"
                    </label>
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || processing.get()
                    >
                        "Sign In"
                    </button>
                    <div class="auth-form__options">
                        <a href="#" class="auth-form__link">
                            "Forgot password?"
                        </a>
                        <A href="/signup" attr:class="auth-form__link">
                            "Don't have an account? Sign Up"
                        </A>
                    </div>
                </form>
            </div>
            <footer class="auth-page__footer">
                <Copyright/>
            </footer>
        </div>
    }
}

fn login_request(username: FormInput, password: FormInput) -> LoginRequest {
    LoginRequest {
        username: username.value_untracked(),
        password: password.value_untracked(),
    }
}
