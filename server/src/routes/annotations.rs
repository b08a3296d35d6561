//! Annotation save route.

#[cfg(test)]
#[path = "annotations_test.rs"]
mod annotations_test;

use axum::extract::State;
use axum::response::Json;
use uuid::Uuid;
use wire::{SavePayload, SaveResponse};

use crate::state::AppState;

/// `POST /save_annotation` — validate and forward an annotation list.
///
/// Every outcome is a `200` with a [`SaveResponse`]; the `success` flag and
/// `message` carry the result, matching what the editor surfaces to the
/// user. A failed forward never loses the caller's points — they stay in the
/// browser for retry.
pub async fn save_annotation(
    State(state): State<AppState>,
    Json(payload): Json<SavePayload>,
) -> Json<SaveResponse> {
    if let Some(message) = validation_error(&payload) {
        return Json(SaveResponse::failure(message));
    }

    let annotation_id = Uuid::new_v4();
    tracing::info!(
        %annotation_id,
        image_url = %payload.image_url,
        points = payload.annotations.len(),
        "forwarding annotation"
    );

    match state.relay.forward(&payload).await {
        Ok(()) => Json(SaveResponse::ok(saved_message(
            annotation_id,
            payload.annotations.len(),
        ))),
        Err(e) => {
            tracing::warn!(%annotation_id, error = %e, "annotation forward failed");
            Json(SaveResponse::failure(e.to_string()))
        }
    }
}

/// Reject payloads missing either locator before any outbound call is made.
fn validation_error(payload: &SavePayload) -> Option<String> {
    if payload.image_url.trim().is_empty() {
        return Some("no image URL provided".to_owned());
    }
    if payload.bubble_save_url.trim().is_empty() {
        return Some("no Bubble save URL provided".to_owned());
    }
    None
}

fn saved_message(annotation_id: Uuid, points: usize) -> String {
    format!("annotation {annotation_id} saved ({points} points)")
}
