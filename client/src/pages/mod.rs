//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form fields and submit flow and delegates rendering of
//! shared pieces to `components`. Field rules shared by both auth forms live
//! in `fields`.

pub mod dashboard;
pub(crate) mod fields;
pub mod login;
pub mod signup;
