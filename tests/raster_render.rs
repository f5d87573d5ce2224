//! Renders whole frames into the in-memory surface and checks the pixels

use fractal_canopy::animation::{GrowthFormula, ManualClock};
use fractal_canopy::render::{Color, FrameOutcome, RasterSurface, Surface};
use fractal_canopy::visual::analyze_pixels;
use fractal_canopy::{Canopy, CanopyConfig};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn metrics(surface: &RasterSurface) -> fractal_canopy::visual::FrameMetrics {
    analyze_pixels(surface.as_rgba(), surface.width(), surface.height())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn tree_grows_up_from_bottom_center() {
    init_tracing();
    let canopy = Canopy::default();
    let mut surface = RasterSurface::new(200, 200);

    let outcome = canopy.draw_at(&mut surface, 0.0);
    assert!(matches!(outcome, FrameOutcome::Drawn { strokes } if strokes > 1));

    // Trunk runs from (100, 200) up to (100, 175) with width 5
    assert_eq!(surface.pixel(100, 199), Some(WHITE));
    assert_eq!(surface.pixel(100, 185), Some(WHITE));
    assert_eq!(surface.pixel(0, 0), Some(BLACK));

    let m = metrics(&surface);
    let bounds = m.lit_bounds.expect("tree should be visible");
    assert_eq!(bounds.max_y, 199);
    assert!(bounds.min_y < 175, "branches should reach above the trunk");
    // Root growth 0.25 cannot reach the upper half of the screen
    assert!(bounds.min_y >= 100);
    assert!(m.lit_coverage > 0.0 && m.lit_coverage < 0.5);
}

#[test]
fn identical_frames_for_identical_time() {
    let canopy = Canopy::default();
    let mut a = RasterSurface::new(160, 120);
    let mut b = RasterSurface::new(160, 120);
    canopy.draw_at(&mut a, 3.7);
    canopy.draw_at(&mut b, 3.7);
    assert_eq!(a.as_rgba(), b.as_rgba());

    // Redrawing over an old frame gives the same picture as a fresh surface
    let mut reused = RasterSurface::new(160, 120);
    canopy.draw_at(&mut reused, 1.1);
    canopy.draw_at(&mut reused, 3.7);
    assert_eq!(reused.as_rgba(), a.as_rgba());
}

#[test]
fn sapling_at_time_zero_only_clears() {
    let config = CanopyConfig {
        growth: GrowthFormula::SAPLING,
        ..Default::default()
    };
    let canopy = Canopy::new(config).unwrap();
    let mut surface = RasterSurface::new(50, 50);
    surface.clear(Color::WHITE);

    // Growth is exactly zero: one zero-width segment, nothing stroked
    assert_eq!(canopy.segments_at(0.0).len(), 1);
    assert_eq!(canopy.draw_at(&mut surface, 0.0), FrameOutcome::Drawn { strokes: 0 });
    assert_eq!(metrics(&surface).lit_coverage, 0.0);
}

#[test]
fn surface_resize_between_frames() {
    init_tracing();
    let canopy = Canopy::default();
    let clock = ManualClock::new(0.0);
    let mut surface = RasterSurface::new(0, 0);

    assert_eq!(canopy.draw(&mut surface, &clock), FrameOutcome::Skipped);

    surface.resize(100, 200);
    clock.advance(0.5);
    assert!(matches!(canopy.draw(&mut surface, &clock), FrameOutcome::Drawn { .. }));
    // Portrait: scale follows the width, so the trunk starts at (50, 150)
    assert_eq!(surface.pixel(50, 148), Some(WHITE));
    assert!((0..100).all(|x| surface.pixel(x, 199) == Some(BLACK)));

    surface.resize(200, 100);
    canopy.draw(&mut surface, &clock);
    // Landscape: the trunk starts at the bottom edge, (100, 100)
    assert_eq!(surface.pixel(100, 98), Some(WHITE));
    assert_eq!(surface.pixel(0, 0), Some(BLACK));
}

#[test]
fn palette_from_yaml() {
    let canopy = Canopy::from_yaml(
        r##"
palette:
  background: "#204060"
  foreground: "#ff0"
"##,
    )
    .unwrap();
    let mut surface = RasterSurface::new(100, 100);
    canopy.draw_at(&mut surface, 0.0);

    assert_eq!(surface.pixel(0, 0), Some([0x20, 0x40, 0x60, 255]));
    assert_eq!(surface.pixel(50, 99), Some([255, 255, 0, 255]));
}

#[test]
fn wide_variation_still_terminates() {
    let canopy = Canopy::from_yaml(
        "tree:\n  branch_count: [2, 3]\n  angle_variation: 180\n  decay: [0.89, 0.9]\n",
    )
    .unwrap();
    for i in 0..10 {
        let segments = canopy.segments_at(i as f64 * 0.6);
        assert!(!segments.is_empty());
        assert!(segments.iter().all(|s| s.width.is_finite()));
    }
}
