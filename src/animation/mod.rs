//! Time inputs of the animation
//!
//! Formulas turn elapsed seconds into per-frame growth and wind twist;
//! clocks supply those elapsed seconds.

mod formulas;
mod clock;

pub use formulas::{GrowthFormula, WindFormula, FrameParams, MAX_ROOT_GROWTH};
pub use clock::{ClockSource, AnimationState, ManualClock, PerformanceClock};
