use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};
use crate::error::{CanopyError, CanopyResult};
use crate::math::{Point2D, SurfaceSize};
use super::color::Color;
use super::surface::Surface;

/// `<canvas>` 2D context exposed as a [`Surface`]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // Last observed CSS size, used to detect layout changes
    css_width: i32,
    css_height: i32,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> CanopyResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| CanopyError::browser("Failed to get 2D context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanopyError::browser("Context is not a CanvasRenderingContext2d"))?;

        Ok(Self {
            canvas,
            ctx,
            css_width: 0,
            css_height: 0,
        })
    }

    /// Create a canvas that covers the viewport behind the page content
    pub fn create_fullscreen(document: &Document) -> CanopyResult<HtmlCanvasElement> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CanopyError::browser("Created element is not a canvas"))?;

        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("width", "100vw")?;
        style.set_property("height", "100vh")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("z-index", "-10")?;

        let body = document
            .body()
            .ok_or_else(|| CanopyError::browser("Document has no body"))?;
        body.append_child(&canvas)?;

        Ok(canvas)
    }

    /// Match the backing store to the element's laid-out size times the device
    /// pixel ratio. Returns true when the canvas was resized (and repainted).
    pub fn sync_size(&mut self, background: Color) -> bool {
        let css_width = self.canvas.client_width();
        let css_height = self.canvas.client_height();
        if css_width == self.css_width && css_height == self.css_height {
            return false;
        }

        let pixel_ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        self.css_width = css_width;
        self.css_height = css_height;

        let width = (css_width as f64 * pixel_ratio).floor().max(0.0) as u32;
        let height = (css_height as f64 * pixel_ratio).floor().max(0.0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        tracing::debug!(width, height, pixel_ratio, "canvas resized");

        self.clear(background);
        true
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self, color: Color) {
        let size = self.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, size.width, size.height);
    }

    fn stroke_line(&mut self, from: Point2D, to: Point2D, width: f64, color: Color) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.set_line_width(width);
        ctx.set_stroke_style_str(&color.to_css());
        ctx.line_to(to.x, to.y);
        ctx.stroke();
        ctx.close_path();
    }
}
