//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the app-wide session context; `form_input` is per-field state
//! created by each page and dropped when the page unmounts.

pub mod auth;
pub mod form_input;
