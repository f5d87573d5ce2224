//! In-memory RGBA surface.
//!
//! Lets frames be rendered and inspected without a browser. Lines are drawn
//! without anti-aliasing: a pixel is painted when its center lies within half
//! the stroke width of the segment, and strokes are at least one pixel wide.

use crate::math::{Point2D, SurfaceSize};
use super::color::Color;
use super::surface::Surface;

/// RGBA pixel buffer mirroring a canvas
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Zero-sized surfaces are allowed and report themselves as not drawable
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Resize, discarding the previous contents
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize * 4];
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }
}

/// Distance from `p` to the segment `a`-`b`
fn distance_to_segment(p: Point2D, a: Point2D, b: Point2D) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(&a);
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    p.distance(&(a + ab * t))
}

impl Surface for RasterSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width as f64, self.height as f64)
    }

    fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    fn stroke_line(&mut self, from: Point2D, to: Point2D, width: f64, color: Color) {
        if self.width == 0 || self.height == 0 || !from.is_finite() || !to.is_finite() {
            return;
        }
        let half = (width / 2.0).max(0.5);
        let rgba = color.to_rgba();

        // Bounding box of the stroke, clamped to the surface
        let max_x = self.width as f64 - 1.0;
        let max_y = self.height as f64 - 1.0;
        let x0 = (from.x.min(to.x) - half).floor().clamp(0.0, max_x) as u32;
        let x1 = (from.x.max(to.x) + half).ceil().clamp(0.0, max_x) as u32;
        let y0 = (from.y.min(to.y) - half).floor().clamp(0.0, max_y) as u32;
        let y1 = (from.y.max(to.y) + half).ceil().clamp(0.0, max_y) as u32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point2D::new(x as f64 + 0.5, y as f64 + 0.5);
                if distance_to_segment(center, from, to) <= half {
                    self.put(x, y, rgba);
                }
            }
        }
    }
}
