//! Annotation path: the ordered list of image-space points under edit.
//!
//! The path is the document being produced. Points live in image space so
//! they survive any amount of panning and zooming, and the closure test uses
//! image units so the snap radius does not change with zoom level.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use crate::consts::CLOSE_TOLERANCE;
use crate::view::{Point, Size};

/// Ordered image-space point sequence.
///
/// Insertion order is significant: the first point anchors closure detection
/// and gets distinct marker styling. Points are never deduplicated.
#[derive(Debug, Clone, Default)]
pub struct AnnotationPath {
    points: Vec<Point>,
}

impl AnnotationPath {
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append `point` if it lies on the image; out-of-bounds points are
    /// dropped silently. Returns whether the point was recorded.
    pub fn add_point(&mut self, point: Point, image: Size) -> bool {
        let inside =
            point.x >= 0.0 && point.x <= image.width && point.y >= 0.0 && point.y <= image.height;
        if inside {
            self.points.push(point);
        }
        inside
    }

    /// Remove and return the most recent point. `None` on an empty path.
    pub fn undo_last(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Drop every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Whether the path forms a closed polygon: at least three points, with
    /// the first and last within [`CLOSE_TOLERANCE`] image units of each
    /// other (strictly less). Recomputed on every call.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        (first.x - last.x).hypot(first.y - last.y) < CLOSE_TOLERANCE
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
