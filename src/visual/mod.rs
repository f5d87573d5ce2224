//! Frame inspection helpers

pub mod metrics;

pub use metrics::{analyze_pixels, FrameAnalyzer, FrameMetrics, PixelBounds, LIT_THRESHOLD};
