//! Validation rules for the auth form fields.
//!
//! Login and signup must reject the same usernames, so both build their
//! username field from here.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use forms::ValidationRule;

pub(crate) fn username_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::required("Username is required"),
        ValidationRule::email("Invalid email"),
    ]
}

pub(crate) fn password_rules() -> Vec<ValidationRule> {
    vec![ValidationRule::required("Password is required")]
}

pub(crate) fn confirm_password_rules() -> Vec<ValidationRule> {
    vec![ValidationRule::required("Confirm password is required")]
}

pub(crate) fn first_name_rules() -> Vec<ValidationRule> {
    vec![ValidationRule::required("First name is required")]
}

pub(crate) fn last_name_rules() -> Vec<ValidationRule> {
    vec![ValidationRule::required("Last name is required")]
}
