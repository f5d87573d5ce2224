//! Frame scheduling.
//!
//! The animation loop is self-perpetuating: every frame callback first asks the
//! scheduler for the next frame, then draws. Stopping the loop simply stops
//! those requests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::error::{CanopyError, CanopyResult};

pub type FrameCallback = Box<dyn FnOnce()>;

/// Host hook that runs a callback once, before the next displayed frame
pub trait FrameScheduler {
    fn request_next_frame(&self, callback: FrameCallback) -> CanopyResult<()>;
}

/// `window.requestAnimationFrame`
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    fn request_next_frame(&self, callback: FrameCallback) -> CanopyResult<()> {
        let window = web_sys::window().ok_or_else(|| CanopyError::browser("No window"))?;
        // Freed by wasm-bindgen after its single invocation
        let js_callback = Closure::once_into_js(move || callback());
        window.request_animation_frame(js_callback.unchecked_ref())?;
        Ok(())
    }
}

/// Handle to a running frame loop
pub struct AnimationLoop {
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    /// Start calling `frame` once per scheduled frame until [`stop`](Self::stop)
    pub fn start<S, F>(scheduler: Rc<S>, frame: F) -> CanopyResult<Self>
    where
        S: FrameScheduler + 'static,
        F: FnMut() + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let frame: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(frame));
        schedule(scheduler, frame, running.clone())?;
        tracing::info!("animation loop started");
        Ok(Self { running })
    }

    pub fn stop(&self) {
        if self.running.replace(false) {
            tracing::info!("animation loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<S>(scheduler: Rc<S>, frame: Rc<RefCell<dyn FnMut()>>, running: Rc<Cell<bool>>) -> CanopyResult<()>
where
    S: FrameScheduler + 'static,
{
    let next = scheduler.clone();
    scheduler.request_next_frame(Box::new(move || {
        if !running.get() {
            return;
        }
        if let Err(e) = schedule(next, frame.clone(), running.clone()) {
            tracing::error!(error = %e, "failed to request next frame");
            running.set(false);
        }
        (&mut *frame.borrow_mut())();
    }))
}
