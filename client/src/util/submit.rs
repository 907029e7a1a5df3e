//! Single-flight form submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and signup forms share one lifecycle for their API call: the
//! `processing` flag is raised before the request, cleared on both outcomes,
//! and a submit made while it is raised is dropped. The failure message goes
//! to the form's error signal.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::fmt::Display;
use std::future::Future;

use leptos::prelude::*;

/// Claim `processing` and return the task that drives `request` to completion.
///
/// Returns `None` without touching any signal when a submit is already in
/// flight. The caller spawns the returned future.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn guarded_submit<T, E, Fut, S>(
    action: &'static str,
    processing: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    request: Fut,
    on_success: S,
) -> Option<impl Future<Output = ()> + 'static>
where
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display,
    S: FnOnce(T) + 'static,
{
    if processing.get_untracked() {
        return None;
    }
    processing.set(true);

    Some(async move {
        match request.await {
            Ok(value) => {
                #[cfg(feature = "hydrate")]
                log::debug!("{action} succeeded");
                processing.set(false);
                on_success(value);
            }
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::warn!("{action} failed: {e}");
                error.set(Some(e.to_string()));
                processing.set(false);
            }
        }
    })
}
