use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub mod animation;
pub mod config;
pub mod error;
pub mod growth;
pub mod math;
pub mod render;
pub mod visual;
mod canopy;

// Re-export frame analyzer for JavaScript
pub use visual::FrameAnalyzer;

pub use canopy::Canopy;
pub use config::CanopyConfig;
pub use error::{CanopyError, CanopyResult};

use animation::PerformanceClock;
use render::{AnimationFrameScheduler, AnimationLoop, CanvasSurface, FrameOutcome};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Canvas, clock and configuration shared with the frame loop
struct Stage {
    canopy: Canopy,
    surface: CanvasSurface,
    clock: PerformanceClock,
}

impl Stage {
    fn frame(&mut self) -> FrameOutcome {
        let background = self.canopy.config().palette.background;
        self.surface.sync_size(background);
        self.canopy.draw(&mut self.surface, &self.clock)
    }

    fn frame_at(&mut self, t: f64) -> FrameOutcome {
        let background = self.canopy.config().palette.background;
        self.surface.sync_size(background);
        self.canopy.draw_at(&mut self.surface, t)
    }
}

/// Animated fractal tree exposed to JavaScript
#[wasm_bindgen]
pub struct FractalCanopy {
    stage: Rc<RefCell<Stage>>,
    animation: Option<AnimationLoop>,
}

#[wasm_bindgen]
impl FractalCanopy {
    /// Draw into an existing canvas
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FractalCanopy, JsValue> {
        let surface = CanvasSurface::new(canvas).map_err(to_js)?;
        Ok(Self {
            stage: Rc::new(RefCell::new(Stage {
                canopy: Canopy::default(),
                surface,
                clock: PerformanceClock::new(),
            })),
            animation: None,
        })
    }

    /// Create a full-viewport background canvas and draw into it
    #[wasm_bindgen]
    pub fn attach_to_body() -> Result<FractalCanopy, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = CanvasSurface::create_fullscreen(&document).map_err(to_js)?;
        Self::new(canvas)
    }

    /// Replace the configuration with one parsed from YAML
    #[wasm_bindgen]
    pub fn load_config(&mut self, yaml: &str) -> Result<(), JsValue> {
        let canopy = Canopy::from_yaml(yaml).map_err(to_js)?;
        tracing::info!(config = ?canopy.config(), "configuration loaded");
        self.stage.borrow_mut().canopy = canopy;
        Ok(())
    }

    /// Draw the frame for the current clock time; returns the number of strokes
    #[wasm_bindgen]
    pub fn render(&mut self) -> usize {
        strokes(self.stage.borrow_mut().frame())
    }

    /// Draw the frame for time `t` (seconds); returns the number of strokes
    #[wasm_bindgen]
    pub fn render_at(&mut self, t: f64) -> usize {
        strokes(self.stage.borrow_mut().frame_at(t))
    }

    /// Number of segments the tree has at time `t`
    #[wasm_bindgen]
    pub fn segment_count_at(&self, t: f64) -> usize {
        self.stage.borrow().canopy.segments_at(t).len()
    }

    /// Start the requestAnimationFrame loop
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.is_running() {
            return Ok(());
        }
        let stage = self.stage.clone();
        let animation = AnimationLoop::start(Rc::new(AnimationFrameScheduler), move || {
            stage.borrow_mut().frame();
        })
        .map_err(to_js)?;
        self.animation = Some(animation);
        Ok(())
    }

    /// Stop requesting frames; the last frame stays on the canvas
    #[wasm_bindgen]
    pub fn stop(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.stop();
        }
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.animation.as_ref().is_some_and(|a| a.is_running())
    }
}

fn strokes(outcome: FrameOutcome) -> usize {
    match outcome {
        FrameOutcome::Drawn { strokes } => strokes,
        FrameOutcome::Skipped => 0,
    }
}

fn to_js(e: CanopyError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
