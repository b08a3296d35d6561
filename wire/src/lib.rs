//! Shared wire types for the save exchange.
//!
//! This crate owns the JSON representation used by both `server` and
//! `client`: the payload the browser posts to the relay and the structured
//! response the relay always answers with. The field names are consumed by
//! Bubble workflows on the far side of the relay, so they are part of the
//! external contract and must not drift between the two crates.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

/// A single annotation point, in pixels of the unscaled source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WirePoint {
    pub x: f64,
    pub y: f64,
}

impl WirePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Body of `POST /save_annotation`: the ordered annotation list plus the two
/// locators the relay needs to persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    /// Source image the points were placed on.
    pub image_url: String,
    /// Ordered image-space points.
    pub annotations: Vec<WirePoint>,
    /// Bubble workflow URL the relay forwards the annotation list to.
    pub bubble_save_url: String,
}

/// Response body for every save attempt, success or failure alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Whether the annotation list reached the Bubble endpoint.
    pub success: bool,
    /// Human-readable outcome, surfaced verbatim in the editor status line.
    pub message: String,
}

impl SaveResponse {
    /// Successful outcome with the given status message.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    /// Failed outcome with the given error message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}
