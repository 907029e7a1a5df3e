//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared pieces of the auth screens. Field state is
//! passed in as a [`crate::state::form_input::FormInput`] handle rather than
//! read from context.

pub mod copyright;
pub mod form_alert;
pub mod text_field;
