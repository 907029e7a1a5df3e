//! Networking modules for the authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and maps failures to [`api::ApiError`];
//! `types` defines the JSON request bodies.

pub mod api;
pub mod types;
