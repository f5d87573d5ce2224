use crate::animation::{AnimationState, ClockSource, FrameParams};
use crate::config::CanopyConfig;
use crate::error::CanopyResult;
use crate::growth::{Segment, TreeGenerator};
use crate::render::{FrameOutcome, FrameRenderer, Surface};

/// Configured animation: time in, drawing out.
///
/// Holds only configuration. Each frame is computed from scratch from the
/// elapsed time, so frames can be drawn in any order, or repeated.
#[derive(Debug, Clone)]
pub struct Canopy {
    config: CanopyConfig,
    generator: TreeGenerator,
    renderer: FrameRenderer,
}

impl Canopy {
    pub fn new(config: CanopyConfig) -> CanopyResult<Self> {
        config.validate()?;
        Ok(Self {
            generator: TreeGenerator::new(config.tree)?,
            renderer: FrameRenderer::new(config.palette),
            config,
        })
    }

    pub fn from_yaml(yaml: &str) -> CanopyResult<Self> {
        Self::new(CanopyConfig::from_yaml(yaml)?)
    }

    pub fn config(&self) -> &CanopyConfig {
        &self.config
    }

    pub fn frame_params(&self, t: f64) -> FrameParams {
        FrameParams::at(t, &self.config.growth, &self.config.wind)
    }

    /// Segments of the tree at time `t`; none for a non-finite time
    pub fn segments_at(&self, t: f64) -> Vec<Segment> {
        if !t.is_finite() {
            return Vec::new();
        }
        self.generator.generate(self.frame_params(t))
    }

    /// Draw the tree at time `t`
    #[tracing::instrument(level = "trace", skip(self, surface))]
    pub fn draw_at<S: Surface + ?Sized>(&self, surface: &mut S, t: f64) -> FrameOutcome {
        if !surface.size().is_drawable() {
            return FrameOutcome::Skipped;
        }
        if !t.is_finite() {
            tracing::debug!(t, "non-finite frame time, skipping");
            return FrameOutcome::Skipped;
        }
        let frame = self.frame_params(t);
        let outcome = self
            .renderer
            .render_frame(surface, self.generator.segments(frame));
        tracing::debug!(t, growth = frame.growth, wind_twist = frame.wind_twist, ?outcome, "frame drawn");
        outcome
    }

    /// Draw the frame for the clock's current time
    pub fn draw<S, C>(&self, surface: &mut S, clock: &C) -> FrameOutcome
    where
        S: Surface + ?Sized,
        C: ClockSource + ?Sized,
    {
        let state = AnimationState::sample(clock);
        self.draw_at(surface, state.elapsed_seconds)
    }
}

impl Default for Canopy {
    fn default() -> Self {
        Self {
            config: CanopyConfig::default(),
            generator: TreeGenerator::default(),
            renderer: FrameRenderer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualClock;
    use crate::render::RasterSurface;

    #[test]
    fn test_segments_follow_time() {
        let canopy = Canopy::default();
        let a = canopy.segments_at(0.0);
        let b = canopy.segments_at(0.0);
        assert_eq!(a, b);
        assert!((a[0].width - 5.0).abs() < 1e-12);

        let later = canopy.segments_at(1.0);
        assert_ne!(a[0], later[0]);
    }

    #[test]
    fn test_unsized_surface_is_skipped() {
        let canopy = Canopy::default();
        let mut surface = RasterSurface::new(0, 0);
        assert_eq!(canopy.draw_at(&mut surface, 0.0), FrameOutcome::Skipped);
    }

    #[test]
    fn test_draw_uses_clock() {
        let canopy = Canopy::default();
        let clock = ManualClock::new(0.0);
        let mut from_clock = RasterSurface::new(64, 48);
        let mut direct = RasterSurface::new(64, 48);

        clock.advance(2.5);
        canopy.draw(&mut from_clock, &clock);
        canopy.draw_at(&mut direct, 2.5);
        assert_eq!(from_clock.as_rgba(), direct.as_rgba());
    }

    #[test]
    fn test_non_finite_time_is_skipped() {
        let canopy = Canopy::default();
        let mut surface = RasterSurface::new(64, 48);
        for t in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(canopy.segments_at(t).is_empty(), "t={}", t);
            assert_eq!(canopy.draw_at(&mut surface, t), FrameOutcome::Skipped, "t={}", t);
        }
        assert!(surface.as_rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_invalid_yaml_config() {
        assert!(Canopy::from_yaml("tree:\n  decay: [0.0, 0.5]\n").is_err());
    }
}
