//! Pixel metrics for rendered frames
//!
//! Lets tests (and the page, through `FrameAnalyzer`) check where and how much
//! of the tree was drawn without looking at the image.

use wasm_bindgen::prelude::*;

/// Brightness above which a pixel counts as part of the tree
pub const LIT_THRESHOLD: f32 = 0.05;

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelBounds {
    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) as f32 / 2.0,
            (self.min_y + self.max_y) as f32 / 2.0,
        )
    }
}

/// Metrics computed from a rendered frame
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    /// Average brightness (0-1)
    pub avg_brightness: f32,
    /// Maximum brightness found
    pub max_brightness: f32,
    /// Fraction of pixels above [`LIT_THRESHOLD`]
    pub lit_coverage: f32,
    /// Smallest rectangle holding every lit pixel
    pub lit_bounds: Option<PixelBounds>,
}

/// Analyze raw pixel data (RGBA format, 4 bytes per pixel)
pub fn analyze_pixels(pixels: &[u8], width: u32, height: u32) -> FrameMetrics {
    let pixel_count = width as usize * height as usize;
    if pixel_count == 0 || pixels.len() < pixel_count * 4 {
        return FrameMetrics::default();
    }

    let mut total_brightness = 0.0f64;
    let mut max_brightness = 0.0f32;
    let mut lit_pixels = 0u32;
    let mut bounds: Option<PixelBounds> = None;

    for (i, px) in pixels.chunks_exact(4).take(pixel_count).enumerate() {
        let r = px[0] as f32 / 255.0;
        let g = px[1] as f32 / 255.0;
        let b = px[2] as f32 / 255.0;

        // Luminance
        let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
        total_brightness += brightness as f64;
        max_brightness = max_brightness.max(brightness);

        if brightness > LIT_THRESHOLD {
            lit_pixels += 1;
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            bounds = Some(match bounds {
                None => PixelBounds { min_x: x, min_y: y, max_x: x, max_y: y },
                Some(b) => PixelBounds {
                    min_x: b.min_x.min(x),
                    min_y: b.min_y.min(y),
                    max_x: b.max_x.max(x),
                    max_y: b.max_y.max(y),
                },
            });
        }
    }

    FrameMetrics {
        avg_brightness: (total_brightness / pixel_count as f64) as f32,
        max_brightness,
        lit_coverage: lit_pixels as f32 / pixel_count as f32,
        lit_bounds: bounds,
    }
}

/// WASM-bindgen wrapper for analyzing canvas pixels from JavaScript
#[wasm_bindgen]
pub struct FrameAnalyzer;

#[wasm_bindgen]
impl FrameAnalyzer {
    /// Analyze `ImageData` bytes and return JSON metrics
    #[wasm_bindgen]
    pub fn analyze(pixels: &[u8], width: u32, height: u32) -> String {
        let metrics = analyze_pixels(pixels, width, height);
        let bounds = match metrics.lit_bounds {
            Some(b) => format!("[{}, {}, {}, {}]", b.min_x, b.min_y, b.max_x, b.max_y),
            None => "null".to_string(),
        };
        format!(
            r#"{{
  "avgBrightness": {:.4},
  "maxBrightness": {:.4},
  "litCoverage": {:.4},
  "litBounds": {}
}}"#,
            metrics.avg_brightness, metrics.max_brightness, metrics.lit_coverage, bounds
        )
    }
}
