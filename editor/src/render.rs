//! Rendering: draws the image and annotation overlay to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only editor state
//! and produces pixels — it does not mutate any application state, so a
//! redundant repaint is always safe.
//!
//! All fallible Canvas2D calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Editor::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{
    CLOSED_STROKE_COLOR, DASH_GAP, DASH_SEGMENT, FILL_COLOR, FIRST_MARKER_COLOR,
    FIRST_MARKER_RADIUS, MARKER_COLOR, MARKER_RADIUS, OPEN_STROKE_COLOR, PATH_STROKE_WIDTH,
};
use crate::engine::EditorCore;
use crate::path::AnnotationPath;
use crate::view::Point;

/// Draw one frame: the image under the current view transform, then the
/// annotation overlay. A frame before the image and container extents are
/// both known is just a cleared surface.
///
/// # Errors
///
/// Returns `Err` if any Canvas2D call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    image: Option<&HtmlImageElement>,
    core: &EditorCore,
) -> Result<(), JsValue> {
    let container = core.container();
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, container.width, container.height);

    let (Some(view), Some(image)) = (core.view(), image) else {
        return Ok(());
    };

    ctx.save();
    ctx.translate(view.offset_x, view.offset_y)?;
    ctx.scale(view.scale, view.scale)?;
    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)?;
    draw_path(ctx, &core.path, view.scale, core.dash_offset())?;
    ctx.restore();
    Ok(())
}

/// Stroke the polyline, closing and filling it when the path is closed, then
/// draw the point markers. All widths and radii are divided by `scale` so
/// they stay constant in screen pixels.
fn draw_path(
    ctx: &CanvasRenderingContext2d,
    path: &AnnotationPath,
    scale: f64,
    dash_offset: f64,
) -> Result<(), JsValue> {
    let points = path.points();
    let Some(first) = points.first() else {
        return Ok(());
    };

    ctx.set_line_width(PATH_STROKE_WIDTH / scale);
    trace_polyline(ctx, points);

    if path.is_closed() {
        ctx.line_to(first.x, first.y);
        let dash = js_sys::Array::new();
        dash.push(&JsValue::from_f64(DASH_SEGMENT / scale));
        dash.push(&JsValue::from_f64(DASH_GAP / scale));
        ctx.set_line_dash(&dash)?;
        ctx.set_line_dash_offset(dash_offset);
        ctx.set_stroke_style_str(CLOSED_STROKE_COLOR);
        ctx.stroke();

        // Separate solid path for the fill so the dash pattern doesn't leak.
        ctx.set_line_dash(&js_sys::Array::new())?;
        ctx.set_fill_style_str(FILL_COLOR);
        trace_polyline(ctx, points);
        ctx.close_path();
        ctx.fill();
    } else {
        ctx.set_line_dash(&js_sys::Array::new())?;
        ctx.set_stroke_style_str(OPEN_STROKE_COLOR);
        ctx.stroke();
    }

    draw_markers(ctx, points, scale)
}

fn trace_polyline(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            ctx.move_to(point.x, point.y);
        } else {
            ctx.line_to(point.x, point.y);
        }
    }
}

/// Marker circle per point; the first point is larger and colored like the
/// closed stroke so the user can aim the closing click at it.
fn draw_markers(ctx: &CanvasRenderingContext2d, points: &[Point], scale: f64) -> Result<(), JsValue> {
    for (index, point) in points.iter().enumerate() {
        let (radius, color) = if index == 0 {
            (FIRST_MARKER_RADIUS, FIRST_MARKER_COLOR)
        } else {
            (MARKER_RADIUS, MARKER_COLOR)
        };
        ctx.begin_path();
        ctx.arc(point.x, point.y, radius / scale, 0.0, 2.0 * PI)?;
        ctx.set_fill_style_str(color);
        ctx.fill();
    }
    Ok(())
}
