//! Mapping from normalized cartesian coordinates to surface pixels.
//!
//! Normalized space spans -1..1 along the shorter surface axis with +y up.
//! Surface space is in pixels with the origin at the top-left and +y down.

use super::vec2::Point2D;

/// Pixel dimensions of a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// A surface with a zero (or negative) axis has not been laid out yet
    pub fn is_drawable(&self) -> bool {
        self.min_dimension() > 0.0
    }

    pub fn as_point(&self) -> Point2D {
        Point2D::new(self.width, self.height)
    }
}

/// `(p * (1, -1) * min(w, h) + (w, h)) / 2`
///
/// Callers must skip the frame when `size` is not drawable.
pub fn to_surface_coord(p: Point2D, size: SurfaceSize) -> Point2D {
    (p.scale_by(&Point2D::FLIP_Y) * size.min_dimension() + size.as_point()) / 2.0
}
