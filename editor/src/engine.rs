use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{CURSOR_ADD, CURSOR_PAN, CURSOR_PANNING, DASH_SPEED, ZOOM_STEP};
use crate::input::{Button, InputState, Key, Mode, Modifiers};
use crate::path::AnnotationPath;
use crate::render;
use crate::view::{Point, Size, ViewTransform};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Change the CSS cursor over the drawing surface.
    SetCursor(&'static str),
    /// State changed in a way that requires a repaint.
    RenderNeeded,
}

/// Core editor state — all logic that doesn't depend on browser elements.
///
/// Separated from [`Editor`] so it can be tested without WASM/browser
/// dependencies.
pub struct EditorCore {
    pub path: AnnotationPath,
    pub mode: Mode,
    pub input: InputState,
    view: Option<ViewTransform>,
    container: Size,
    image: Size,
    dash_offset: f64,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self {
            path: AnnotationPath::new(),
            mode: Mode::default(),
            input: InputState::default(),
            view: None,
            container: Size::default(),
            image: Size::default(),
            dash_offset: 0.0,
        }
    }
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Geometry inputs ---

    /// Record the drawing-surface extent. Refits the view when the extent
    /// actually changed and the image size is already known.
    pub fn set_container(&mut self, width: f64, height: f64) {
        let next = Size::new(width, height);
        if next == self.container {
            return;
        }
        self.container = next;
        self.refit();
    }

    /// Record the image pixel extent once decoding has produced it. Refits
    /// the view when it changed and the container size is already known.
    pub fn set_image_size(&mut self, width: f64, height: f64) {
        let next = Size::new(width, height);
        if next == self.image {
            return;
        }
        self.image = next;
        self.refit();
    }

    /// The view exists only once both extents are known positive; fitting
    /// earlier would divide by zero.
    fn refit(&mut self) {
        self.view = (self.container.is_positive() && self.image.is_positive())
            .then(|| ViewTransform::fit(self.container, self.image));
    }

    // --- Commands ---

    /// Switch the interaction mode. Leaves the path and view untouched.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        self.mode = mode;
        vec![Action::SetCursor(self.mode_cursor())]
    }

    /// Remove the most recent point, if any.
    pub fn undo(&mut self) -> Vec<Action> {
        if self.path.undo_last().is_some() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Drop every point.
    pub fn clear_path(&mut self) -> Vec<Action> {
        if self.path.is_empty() {
            return Vec::new();
        }
        self.path.clear();
        vec![Action::RenderNeeded]
    }

    /// Zoom in one step toward the viewport center.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.zoom_at_center(ZOOM_STEP)
    }

    /// Zoom out one step from the viewport center. No-op at the fit scale.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.zoom_at_center(1.0 / ZOOM_STEP)
    }

    fn zoom_at_center(&mut self, factor: f64) -> Vec<Action> {
        let pivot = Point::new(self.container.width / 2.0, self.container.height / 2.0);
        if let Some(view) = self.view.as_mut() {
            if view.zoom(factor, pivot) {
                return vec![Action::RenderNeeded];
            }
        }
        Vec::new()
    }

    // --- Pointer events ---

    /// Pointer-down starts a pan drag in pan mode; add mode places its point
    /// on pointer-up instead, so a press alone does nothing there.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if self.mode == Mode::Pan && button == Button::Primary && self.view.is_some() {
            self.input = InputState::Panning { last_screen: screen };
            return vec![Action::SetCursor(CURSOR_PANNING)];
        }
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let InputState::Panning { last_screen } = self.input else {
            return Vec::new();
        };
        let Some(view) = self.view.as_mut() else {
            return Vec::new();
        };
        view.pan(screen.x - last_screen.x, screen.y - last_screen.y);
        self.input = InputState::Panning { last_screen: screen };
        vec![Action::RenderNeeded]
    }

    /// Pointer-up ends an active drag, or places a point in add mode.
    ///
    /// An active drag always wins: releasing a pan gesture never also
    /// registers as an add-click.
    pub fn on_pointer_up(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if matches!(self.input, InputState::Panning { .. }) {
            self.input = InputState::Idle;
            return vec![Action::SetCursor(self.mode_cursor())];
        }
        if self.mode == Mode::Add && button == Button::Primary {
            return self.add_point_at(screen);
        }
        Vec::new()
    }

    fn add_point_at(&mut self, screen: Point) -> Vec<Action> {
        let Some(view) = self.view.as_ref() else {
            return Vec::new();
        };
        let image_point = view.screen_to_image(screen);
        if self.path.add_point(image_point, self.image) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Keyboard ---

    /// Keyboard bindings for the command surface: Ctrl/⌘+Z undoes, `+`/`=`
    /// zooms in, `-` zooms out.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "z" | "Z" if modifiers.ctrl || modifiers.meta => self.undo(),
            "+" | "=" => self.zoom_in(),
            "-" => self.zoom_out(),
            _ => Vec::new(),
        }
    }

    // --- Animation ---

    /// Whether the dash animation has anything to animate.
    #[must_use]
    pub fn needs_animation(&self) -> bool {
        self.path.is_closed()
    }

    /// Advance the dash animation by one tick. Mutates only the offset
    /// scalar; the host pairs this with a repaint.
    pub fn advance_dash(&mut self) {
        self.dash_offset -= DASH_SPEED;
    }

    // --- Queries ---

    /// The current view transform, once image and container sizes are known.
    #[must_use]
    pub fn view(&self) -> Option<&ViewTransform> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image
    }

    #[must_use]
    pub fn dash_offset(&self) -> f64 {
        self.dash_offset
    }

    fn mode_cursor(&self) -> &'static str {
        match self.mode {
            Mode::Add => CURSOR_ADD,
            Mode::Pan => CURSOR_PAN,
        }
    }
}

/// The full editor engine. Wraps [`EditorCore`] and owns the browser canvas
/// and image elements.
pub struct Editor {
    canvas: HtmlCanvasElement,
    image: Option<HtmlImageElement>,
    pub core: EditorCore,
}

impl Editor {
    /// Create a new editor bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, image: None, core: EditorCore::new() }
    }

    /// Adopt a decoded image element and refit the view to its pixel size.
    pub fn set_image(&mut self, image: HtmlImageElement) {
        self.core
            .set_image_size(f64::from(image.natural_width()), f64::from(image.natural_height()));
        self.image = Some(image);
    }

    /// Resize the canvas backing store to the given CSS extent and refit the
    /// view. Must be called whenever the container's dimensions change.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.core.set_container(width, height);
    }

    // --- Delegated commands ---

    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        self.core.set_mode(mode)
    }

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.undo()
    }

    pub fn clear_path(&mut self) -> Vec<Action> {
        self.core.clear_path()
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.core.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.core.zoom_out()
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen, button)
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen, button)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a Canvas2D call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context_2d()?;
        render::draw(&ctx, self.image.as_ref(), &self.core)
    }

    fn context_2d(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))
    }
}
