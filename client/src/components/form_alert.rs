//! Error banner shown above an auth form after a failed submit.

use leptos::prelude::*;

/// Renders `message` as an error alert; renders nothing while it is `None`.
#[component]
pub fn FormAlert(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="form-alert form-alert--error" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
