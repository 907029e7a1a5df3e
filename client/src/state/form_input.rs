//! Reactive binding for one validated form field.
//!
//! DESIGN
//! ======
//! The validation contract lives in [`forms::FieldState`]; this module only
//! places it in a signal so markup re-renders when the value or error
//! changes. Both `on_change` and `on_blur` revalidate.

#[cfg(test)]
#[path = "form_input_test.rs"]
mod form_input_test;

use forms::{FieldState, ValidationRule};
use leptos::prelude::*;

/// Handle to one field's reactive state. Cheap to copy into closures.
#[derive(Clone, Copy, Debug)]
pub struct FormInput {
    state: RwSignal<FieldState>,
}

/// Create a field with `initial` text checked against `rules` in order.
///
/// The initial value is not validated.
pub fn use_form_input(initial: &str, rules: Vec<ValidationRule>) -> FormInput {
    FormInput {
        state: RwSignal::new(FieldState::with_rules(initial, rules)),
    }
}

impl FormInput {
    /// Current text (tracked).
    pub fn value(self) -> String {
        self.state.with(|s| s.value().to_owned())
    }

    /// Current text without subscribing; for submit handlers.
    pub fn value_untracked(self) -> String {
        self.state.with_untracked(|s| s.value().to_owned())
    }

    /// Error message, or the empty string when valid (tracked).
    pub fn helper_text(self) -> String {
        self.state.with(|s| s.helper_text().to_owned())
    }

    /// Whether the last change or blur left the field invalid (tracked).
    pub fn has_error(self) -> bool {
        self.state.with(FieldState::has_error)
    }

    pub fn has_error_untracked(self) -> bool {
        self.state.with_untracked(FieldState::has_error)
    }

    pub fn on_change(self, value: String) {
        self.state.update(|s| s.on_change(value));
    }

    pub fn on_blur(self, value: String) {
        self.state.update(|s| s.on_blur(value));
    }
}
