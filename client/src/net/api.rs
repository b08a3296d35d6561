//! REST helper for the save exchange.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! a stub returning an error, since saving is only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<SaveResponse, String>`: the `Err` string is already a
//! user-facing message, so the caller can surface it directly in the status
//! line without inspecting transport details.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{SavePayload, SaveResponse};

/// Relative endpoint on the relay; the Bubble destination itself travels in
/// the payload, never in the URL.
#[cfg(any(test, feature = "hydrate"))]
const SAVE_ENDPOINT: &str = "/save_annotation";

#[cfg(any(test, feature = "hydrate"))]
fn save_failed_message(status: u16) -> String {
    format!("save request failed: {status}")
}

/// POST the payload to the relay and decode the structured response.
///
/// # Errors
///
/// Returns a user-facing message on transport failure, a non-success HTTP
/// status, or an undecodable response body.
pub async fn save_annotation(payload: &SavePayload) -> Result<SaveResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SAVE_ENDPOINT)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(save_failed_message(resp.status()));
        }
        resp.json::<SaveResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("saving is only available in the browser".to_owned())
    }
}
