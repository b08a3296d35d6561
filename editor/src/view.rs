#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// A point in either screen or image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both extents are strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// View transform mapping image space onto the drawing surface.
///
/// `offset_x` / `offset_y` are the screen-space position of the image's
/// top-left corner. `scale` multiplies image pixels into screen pixels and
/// never drops below `base_scale`, the fit-to-container scale, so the image
/// can never be zoomed smaller than its fitted size.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    pub scale: f64,
    pub base_scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    container: Size,
    image: Size,
}

impl ViewTransform {
    /// Fit `image` inside `container` at minimum zoom, centered on both axes.
    ///
    /// Both extents must be strictly positive; callers gate on
    /// [`Size::is_positive`] before fitting.
    #[must_use]
    pub fn fit(container: Size, image: Size) -> Self {
        let base_scale = (container.width / image.width).min(container.height / image.height);
        Self {
            scale: base_scale,
            base_scale,
            offset_x: (container.width - image.width * base_scale) / 2.0,
            offset_y: (container.height - image.height * base_scale) / 2.0,
            container,
            image,
        }
    }

    /// Convert a screen-space point to image coordinates.
    #[must_use]
    pub fn screen_to_image(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale,
            y: (screen.y - self.offset_y) / self.scale,
        }
    }

    /// Convert an image-space point to screen coordinates.
    #[must_use]
    pub fn image_to_screen(&self, image: Point) -> Point {
        Point {
            x: image.x * self.scale + self.offset_x,
            y: image.y * self.scale + self.offset_y,
        }
    }

    /// Shift the image by a screen-space delta, then re-clamp.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
        self.clamp();
    }

    /// Keep the viewport covered by image content wherever it can be.
    ///
    /// Per axis: an image smaller than the container is centered; a larger
    /// one may not be dragged past either container edge. Idempotent.
    pub fn clamp(&mut self) {
        self.offset_x = clamp_axis(self.offset_x, self.image.width * self.scale, self.container.width);
        self.offset_y = clamp_axis(self.offset_y, self.image.height * self.scale, self.container.height);
    }

    /// Rescale by `factor`, keeping the image point under `pivot` stationary
    /// on screen.
    ///
    /// Returns `false` (state untouched) when the result would fall below
    /// `base_scale`.
    pub fn zoom(&mut self, factor: f64, pivot: Point) -> bool {
        let new_scale = self.scale * factor;
        if new_scale < self.base_scale {
            return false;
        }
        let before = self.screen_to_image(pivot);
        self.scale = new_scale;
        let after = self.image_to_screen(before);
        self.offset_x += pivot.x - after.x;
        self.offset_y += pivot.y - after.y;
        self.clamp();
        true
    }

    /// The container extent this transform was fitted against.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// The image extent this transform was fitted against.
    #[must_use]
    pub fn image(&self) -> Size {
        self.image
    }
}

fn clamp_axis(offset: f64, extent: f64, container: f64) -> f64 {
    if extent <= container {
        (container - extent) / 2.0
    } else {
        offset.clamp(container - extent, 0.0)
    }
}
