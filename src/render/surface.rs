use crate::math::{Point2D, SurfaceSize};
use super::color::Color;

/// A 2D drawing target addressed in pixels (origin top-left, +y down)
pub trait Surface {
    /// Current pixel dimensions; may change between frames
    fn size(&self) -> SurfaceSize;

    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Color);

    /// Stroke a straight line of the given pixel width
    fn stroke_line(&mut self, from: Point2D, to: Point2D, width: f64, color: Color);
}
