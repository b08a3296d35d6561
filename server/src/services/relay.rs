//! Outbound relay: forwards annotation lists to Bubble workflow endpoints.
//!
//! Thin HTTP wrapper around a pooled `reqwest::Client` with explicit
//! timeouts. The Bubble endpoint URL arrives with each payload, so one relay
//! instance serves every customer endpoint.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::time::Duration;

use serde::Serialize;
use wire::{SavePayload, WirePoint};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Error raised while forwarding an annotation list.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the Bubble endpoint failed at the transport level.
    #[error("request to Bubble endpoint failed: {0}")]
    Request(String),

    /// The Bubble endpoint answered with a non-success HTTP status. The
    /// response body rides along so the user sees what the endpoint said.
    #[error("Bubble endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },
}

/// What the Bubble workflow receives. The `bubble_save_url` locator is
/// routing information for the relay and is not echoed onward.
#[derive(Debug, Serialize)]
struct ForwardBody<'a> {
    image_url: &'a str,
    annotations: &'a [WirePoint],
}

impl<'a> ForwardBody<'a> {
    fn new(payload: &'a SavePayload) -> Self {
        Self { image_url: &payload.image_url, annotations: &payload.annotations }
    }
}

pub struct Relay {
    http: reqwest::Client,
}

impl Relay {
    /// Build the relay with its pooled outbound client.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }

    /// POST the annotation list to the payload's Bubble endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Request`] on transport failure and
    /// [`RelayError::Endpoint`] when the endpoint answers non-2xx.
    pub async fn forward(&self, payload: &SavePayload) -> Result<(), RelayError> {
        let response = self
            .http
            .post(&payload.bubble_save_url)
            .json(&ForwardBody::new(payload))
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| RelayError::Request(e.to_string()))?;
            return Err(RelayError::Endpoint { status: status.as_u16(), body });
        }
        Ok(())
    }
}
