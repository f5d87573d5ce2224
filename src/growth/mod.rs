//! Fractal tree generation
//!
//! Turns a frame's growth and wind twist into line segments by recursive
//! branching, with per-branch randomness keyed by tree position.

pub mod rng;
pub mod params;
pub mod generator;

pub use rng::{seed_for, BranchRng, SEED_STRIDE};
pub use params::TreeParams;
pub use generator::{Branch, Segment, Segments, TreeGenerator};
