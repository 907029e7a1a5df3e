//! REST API helpers for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a fixed timeout.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an [`ApiError`] whose `Display` text is what the
//! form shows to the user. A rejected request prefers the server's own
//! `message` field over a generic status line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, RegisterRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

/// Used when `AMC_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1/amcTracker";

/// Requests that get no answer within this window fail with [`ApiError::Timeout`].
pub const REQUEST_TIMEOUT_MS: u32 = 1000;

/// Failure of an API call, rendered directly in the form's alert.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never reached the server or the connection dropped.
    #[error("{0}")]
    Network(String),
    /// No response within the timeout, in milliseconds.
    #[error("timeout of {0}ms exceeded")]
    Timeout(u32),
    /// The request body could not be encoded.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a rejection from a response status and raw body text.
    #[cfg(any(test, feature = "hydrate"))]
    fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| format!("request failed: {status}"));
        Self::Rejected { status, message }
    }
}

/// Base URL for API requests, fixed at compile time.
pub fn api_base_url() -> &'static str {
    option_env!("AMC_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Sign in via `POST user/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, times out, or the server
/// rejects the credentials.
pub async fn login(request: &LoginRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("user/login", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST user/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, times out, or the server
/// rejects the registration.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("user/register", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(path: &str, body: &T) -> Result<(), ApiError> {
    use futures::future::{Either, select};

    let url = endpoint_url(api_base_url(), path);
    let request = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    let send = std::pin::pin!(request.send());
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    let resp = match select(send, timer).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
        Either::Right(((), _)) => {
            log::warn!("POST {url} timed out after {REQUEST_TIMEOUT_MS}ms");
            return Err(ApiError::Timeout(REQUEST_TIMEOUT_MS));
        }
    };

    if resp.ok() {
        log::debug!("POST {url} -> {}", resp.status());
        return Ok(());
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    log::warn!("POST {url} rejected with {status}");
    Err(ApiError::rejected(status, &text))
}
