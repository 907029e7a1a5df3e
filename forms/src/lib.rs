//! Form field validation shared by the auth screens.
//!
//! This crate owns the per-field state controller used by `client`. It has
//! no UI or browser dependencies so the validation contract can be tested
//! natively.
//!
//! DESIGN
//! ======
//! A [`FieldState`] holds one field's text and the message of the first
//! failing [`ValidationRule`]. Rules are scanned in the order supplied and the
//! scan stops at the first failure. Validation runs only on change/blur,
//! never at construction.

pub mod field;
pub mod rule;

pub use field::FieldState;
pub use rule::{RuleKind, ValidationRule, first_failure};
