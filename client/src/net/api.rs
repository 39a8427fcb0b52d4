//! REST helpers for the newsletter backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): these return `ApiError::Unavailable`; pages only fetch
//! after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `ApiError` instead of panics so failed loads degrade to
//! an inline message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::NewsletterResponse;
#[cfg(feature = "hydrate")]
use super::types::SubscribeRequest;

pub const SUBSCRIBE_PATH: &str = "/api/subscribe";

/// Failure modes for backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Path of the newsletter endpoint for `date` (`YYYY-MM-DD`).
pub fn newsletter_url(date: &str) -> String {
    format!("/api/newsletter/{date}")
}

/// Fetch the issue for `date`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the
/// body is not a valid newsletter payload.
pub async fn fetch_newsletter(date: &str) -> Result<NewsletterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&newsletter_url(date))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<NewsletterResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = date;
        Err(ApiError::Unavailable)
    }
}

/// Start a subscription for `email`; the backend mails a confirmation link.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn subscribe(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = SubscribeRequest { email: email.to_owned() };
        let resp = gloo_net::http::Request::post(SUBSCRIBE_PATH)
            .json(&body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}
