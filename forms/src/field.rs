//! Per-field value and error state.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use crate::rule::{ValidationRule, first_failure};

/// One form field's text plus the message of its first failing rule.
///
/// The error is only recomputed by [`FieldState::on_change`] and
/// [`FieldState::on_blur`]. A field built with a value that would fail a
/// rule reports no error until the first interaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    error: Option<String>,
    rules: Vec<ValidationRule>,
}

impl FieldState {
    /// Field with no rules; it can never be invalid.
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_rules(initial, Vec::new())
    }

    /// Field checked against `rules` in the given order.
    pub fn with_rules(initial: impl Into<String>, rules: Vec<ValidationRule>) -> Self {
        Self {
            value: initial.into(),
            error: None,
            rules,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Message of the first failing rule, or `None` when valid.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Error message for display binding; empty when valid.
    #[must_use]
    pub fn helper_text(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Handle an input event: store `value` and revalidate.
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.revalidate_and_set(value.into());
    }

    /// Handle a blur event. Same effect as [`FieldState::on_change`].
    pub fn on_blur(&mut self, value: impl Into<String>) {
        self.revalidate_and_set(value.into());
    }

    fn revalidate_and_set(&mut self, value: String) {
        self.error = first_failure(&self.rules, &value).map(str::to_owned);
        self.value = value;
    }
}
