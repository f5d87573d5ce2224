pub mod color;
pub mod surface;
pub mod renderer;
pub mod raster;
pub mod canvas;
pub mod scheduler;

pub use color::{Color, Palette};
pub use surface::Surface;
pub use renderer::{FrameOutcome, FrameRenderer};
pub use raster::RasterSurface;
pub use canvas::CanvasSurface;
pub use scheduler::{AnimationFrameScheduler, AnimationLoop, FrameCallback, FrameScheduler};
