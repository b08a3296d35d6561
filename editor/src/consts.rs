//! Shared numeric and style constants for the editor crate.

// ── Geometry ────────────────────────────────────────────────────

/// Image-space distance below which the first and last path points count as
/// a closed polygon. Image units, so the snap radius is zoom-independent.
pub const CLOSE_TOLERANCE: f64 = 10.0;

/// Multiplicative step for one zoom-in command; zoom-out uses the inverse.
pub const ZOOM_STEP: f64 = 1.1;

// ── Overlay styling (screen pixels; divided by scale at draw time) ──

/// Path stroke width.
pub const PATH_STROKE_WIDTH: f64 = 2.0;

/// Dash segment length for the closed-polygon stroke.
pub const DASH_SEGMENT: f64 = 10.0;

/// Gap length between dash segments.
pub const DASH_GAP: f64 = 5.0;

/// Dash offset decrement per animation tick.
pub const DASH_SPEED: f64 = 1.0;

/// Marker radius for the first path point.
pub const FIRST_MARKER_RADIUS: f64 = 6.0;

/// Marker radius for every subsequent point.
pub const MARKER_RADIUS: f64 = 4.0;

// ── Colors ──────────────────────────────────────────────────────

/// Stroke for an open (not yet closed) path.
pub const OPEN_STROKE_COLOR: &str = "red";

/// Stroke for a closed polygon.
pub const CLOSED_STROKE_COLOR: &str = "blue";

/// Translucent fill for the enclosed region of a closed polygon.
pub const FILL_COLOR: &str = "rgba(255, 255, 255, 0.5)";

/// Marker fill for the first path point.
pub const FIRST_MARKER_COLOR: &str = "blue";

/// Marker fill for every subsequent point.
pub const MARKER_COLOR: &str = "red";

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor while the add-point mode is active.
pub const CURSOR_ADD: &str = "crosshair";

/// Cursor while the pan mode is active but no drag is in progress.
pub const CURSOR_PAN: &str = "grab";

/// Cursor while a pan drag is in progress.
pub const CURSOR_PANNING: &str = "grabbing";
