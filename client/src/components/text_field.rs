//! Labelled text input bound to a validated field.

use leptos::prelude::*;

use crate::state::form_input::FormInput;

/// Text input with a label and a helper line showing the field's error.
///
/// Both `input` and `blur` events revalidate the field.
#[component]
pub fn TextField(
    input: FormInput,
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    view! {
        <div class=move || field_class(input.has_error())>
            <label class="text-field__label" for=name>
                {label}
                " *"
            </label>
            <input
                class="text-field__input"
                id=name
                name=name
                type=input_type
                required=true
                autocomplete=autocomplete
                autofocus=autofocus
                aria-invalid=move || if input.has_error() { "true" } else { "false" }
                prop:value=move || input.value()
                on:input=move |ev| input.on_change(event_target_value(&ev))
                on:blur=move |ev| input.on_blur(event_target_value(&ev))
            />
            <p class="text-field__helper">{move || input.helper_text()}</p>
        </div>
    }
}

fn field_class(has_error: bool) -> &'static str {
    if has_error { "text-field text-field--error" } else { "text-field" }
}
