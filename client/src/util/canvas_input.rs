//! Canvas input mapping and pointer helper utilities.
//!
//! These are all `#[cfg(feature = "hydrate")]` because they translate
//! browser event types into the editor engine's input model.

#[cfg(feature = "hydrate")]
use editor::input::{Button as EditorButton, Mode as EditorMode, Modifiers as EditorModifiers};
#[cfg(feature = "hydrate")]
use editor::view::Point as EditorPoint;

#[cfg(feature = "hydrate")]
use crate::state::ui::ModeChoice;

#[cfg(feature = "hydrate")]
pub fn map_mode(mode: ModeChoice) -> EditorMode {
    match mode {
        ModeChoice::AddPoints => EditorMode::Add,
        ModeChoice::Pan => EditorMode::Pan,
    }
}

#[cfg(feature = "hydrate")]
pub fn map_button(button: i16) -> EditorButton {
    match button {
        1 => EditorButton::Middle,
        2 => EditorButton::Secondary,
        _ => EditorButton::Primary,
    }
}

#[cfg(feature = "hydrate")]
pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> EditorModifiers {
    EditorModifiers { shift, ctrl, alt, meta }
}

/// Pointer position relative to the canvas, in CSS pixels.
#[cfg(feature = "hydrate")]
pub fn pointer_point(
    ev: &leptos::ev::PointerEvent,
    canvas: &web_sys::HtmlCanvasElement,
) -> EditorPoint {
    let rect = canvas.get_bounding_client_rect();
    EditorPoint::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    )
}
