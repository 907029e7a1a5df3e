//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and browser concerns from page markup to
//! keep them testable without a DOM.

pub mod auth;
pub mod clock;
pub mod submit;
