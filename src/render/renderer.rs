use crate::growth::Segment;
use crate::math::to_surface_coord;
use super::color::Palette;
use super::surface::Surface;

/// What happened to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Surface cleared and this many segments stroked
    Drawn { strokes: usize },
    /// Surface has no size yet; nothing was touched
    Skipped,
}

/// Clears a surface and strokes tree segments onto it
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRenderer {
    pub palette: Palette,
}

impl FrameRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Draw one frame. An empty `segments` only clears the surface.
    pub fn render_frame<S, I>(&self, surface: &mut S, segments: I) -> FrameOutcome
    where
        S: Surface + ?Sized,
        I: IntoIterator<Item = Segment>,
    {
        // Read once so every endpoint of this frame shares one scale
        let size = surface.size();
        if !size.is_drawable() {
            tracing::debug!(width = size.width, height = size.height, "surface not sized yet, skipping frame");
            return FrameOutcome::Skipped;
        }

        surface.clear(self.palette.background);

        let mut strokes = 0;
        for segment in segments {
            // A canvas ignores lineWidth <= 0 and would reuse the previous width
            if !(segment.width > 0.0) {
                continue;
            }
            surface.stroke_line(
                to_surface_coord(segment.start, size),
                to_surface_coord(segment.end, size),
                segment.width,
                self.palette.foreground,
            );
            strokes += 1;
        }

        FrameOutcome::Drawn { strokes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point2D, SurfaceSize};
    use crate::render::color::Color;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Color),
        Stroke(Point2D, Point2D, f64, Color),
    }

    struct RecordingSurface {
        size: SurfaceSize,
        calls: Vec<Call>,
    }

    impl RecordingSurface {
        fn new(width: f64, height: f64) -> Self {
            Self {
                size: SurfaceSize::new(width, height),
                calls: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> SurfaceSize {
            self.size
        }

        fn clear(&mut self, color: Color) {
            self.calls.push(Call::Clear(color));
        }

        fn stroke_line(&mut self, from: Point2D, to: Point2D, width: f64, color: Color) {
            self.calls.push(Call::Stroke(from, to, width, color));
        }
    }

    fn segment(start: Point2D, end: Point2D, width: f64) -> Segment {
        Segment { start, end, width }
    }

    #[test]
    fn test_empty_frame_only_clears() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let outcome = FrameRenderer::default().render_frame(&mut surface, Vec::new());
        assert_eq!(outcome, FrameOutcome::Drawn { strokes: 0 });
        assert_eq!(surface.calls, vec![Call::Clear(Color::BLACK)]);
    }

    #[test]
    fn test_clear_comes_first_and_endpoints_are_mapped() {
        let mut surface = RecordingSurface::new(200.0, 100.0);
        let segments = vec![segment(Point2D::new(0.0, -1.0), Point2D::new(0.0, 0.0), 5.0)];
        FrameRenderer::default().render_frame(&mut surface, segments);

        assert_eq!(
            surface.calls,
            vec![
                Call::Clear(Color::BLACK),
                Call::Stroke(Point2D::new(100.0, 100.0), Point2D::new(100.0, 50.0), 5.0, Color::WHITE),
            ]
        );
    }

    #[test]
    fn test_skips_unsized_surface() {
        let mut surface = RecordingSurface::new(0.0, 480.0);
        let segments = vec![segment(Point2D::ZERO, Point2D::new(0.1, 0.1), 1.0)];
        let outcome = FrameRenderer::default().render_frame(&mut surface, segments);
        assert_eq!(outcome, FrameOutcome::Skipped);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_zero_width_segments_not_stroked() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let segments = vec![
            segment(Point2D::ZERO, Point2D::new(0.0, 0.5), 0.0),
            segment(Point2D::ZERO, Point2D::new(0.5, 0.0), 2.0),
        ];
        let outcome = FrameRenderer::default().render_frame(&mut surface, segments);
        assert_eq!(outcome, FrameOutcome::Drawn { strokes: 1 });
        assert_eq!(surface.calls.len(), 2);
    }

    #[test]
    fn test_palette_is_used() {
        let palette = Palette {
            background: Color::rgb(1, 2, 3),
            foreground: Color::rgb(200, 100, 50),
        };
        let mut surface = RecordingSurface::new(10.0, 10.0);
        let segments = vec![segment(Point2D::ZERO, Point2D::new(0.5, 0.0), 1.0)];
        FrameRenderer::new(palette).render_frame(&mut surface, segments);

        assert_eq!(surface.calls[0], Call::Clear(palette.background));
        assert!(matches!(surface.calls[1], Call::Stroke(_, _, _, c) if c == palette.foreground));
    }
}
