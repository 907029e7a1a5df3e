//! Signup page: account form posting to `user/register`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::copyright::Copyright;
use crate::components::form_alert::FormAlert;
use crate::components::text_field::TextField;
use crate::net::types::RegisterRequest;
use crate::pages::fields;
use crate::state::auth::{AuthState, SessionUser};
use crate::state::form_input::{FormInput, use_form_input};
use crate::util::auth::SIGNED_IN_ROUTE;
use crate::util::submit::guarded_submit;

/// The five signup fields, grouped so the submit handler can copy them as one.
#[derive(Clone, Copy)]
struct SignupFields {
    first_name: FormInput,
    last_name: FormInput,
    username: FormInput,
    password: FormInput,
    confirm_password: FormInput,
}

impl SignupFields {
    fn new() -> Self {
        Self {
            first_name: use_form_input("", fields::first_name_rules()),
            last_name: use_form_input("", fields::last_name_rules()),
            username: use_form_input("", fields::username_rules()),
            password: use_form_input("", fields::password_rules()),
            confirm_password: use_form_input("", fields::confirm_password_rules()),
        }
    }

    /// Body for `user/register`. The confirmation field is not sent.
    fn register_request(self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.value_untracked(),
            password: self.password.value_untracked(),
            first_name: self.first_name.value_untracked(),
            last_name: self.last_name.value_untracked(),
        }
    }
}

/// "First Last" for the dashboard greeting, or `None` if both are blank.
fn display_name(first_name: &str, last_name: &str) -> Option<String> {
    let joined = format!("{} {}", first_name.trim(), last_name.trim());
    let joined = joined.trim();
    (!joined.is_empty()).then(|| joined.to_owned())
}

/// Signup page. A successful registration signs the user in and opens the
/// dashboard.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let form = SignupFields::new();
    let signup_error = RwSignal::new(None::<String>);
    let processing = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.register_request();
        let call = async move { crate::net::api::register(&request).await.map(|()| request) };
        let navigate = navigate.clone();
        let Some(task) = guarded_submit("registration", processing, signup_error, call, move |request: RegisterRequest| {
            let display_name = display_name(&request.first_name, &request.last_name);
            auth.update(|a| {
                a.sign_in(SessionUser {
                    username: request.username,
                    display_name,
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
        <div class="auth-page auth-page--signup">
            <div class="auth-panel">
                <div class="auth-panel__heading">
                    <span class="auth-panel__avatar" aria-hidden="true">"🔒"</span>
                    <h1>"Sign up"</h1>
                </div>
                <form class="auth-form" novalidate=true autocomplete="off" on:submit=on_submit>
                    <FormAlert message=signup_error/>
                    <div class="auth-form__row">
                        <TextField
                            input=form.first_name
                            label="First Name"
                            name="firstName"
                            autofocus=true
                        />
                        <TextField input=form.last_name label="Last Name" name="lastName"/>
                    </div>
                    <TextField
                        input=form.username
                        label="Email Address"
                        name="email"
                        input_type="email"
                    />
                    <div class="auth-form__row">
                        <TextField
                            input=form.password
                            label="Password"
                            name="password"
                            input_type="password"
                            autocomplete="new-password"
                        />
                        <TextField
                            input=form.confirm_password
                            label="Confirm Password"
                            name="confirmPassword"
                            input_type="password"
                            autocomplete="new-password"
                        />
                    </div>
                    <label class="auth-form__remember">
                        <input type="checkbox" value="remember"/>
                        "Remember me"
                    </label>
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || processing.get()
                    >
                        "Register"
                    </button>
                    <div class="auth-form__options auth-form__options--end">
                        <A href="/login" attr:class="auth-form__link">
                            "Already have an account? Sign in"
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
