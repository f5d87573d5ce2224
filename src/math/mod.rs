pub mod vec2;
pub mod coords;

pub use vec2::{Point2D, PolarOffset};
pub use coords::{to_surface_coord, SurfaceSize};
