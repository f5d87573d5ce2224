use serde::{Serialize, Deserialize};
use crate::error::{CanopyError, CanopyResult};
use crate::math::Point2D;
use super::rng::SEED_STRIDE;

/// Parameters controlling tree shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeParams {
    /// Where the trunk starts, in normalized coordinates
    pub start: Point2D,
    /// Initial heading of the trunk (degrees, counter-clockwise from +x)
    pub start_angle: f64,
    /// Branches with growth at or below this stop branching
    pub branching_threshold: f64,
    /// Children deviate from the parent heading by up to this many degrees
    pub angle_variation: f64,
    /// Inclusive `[min, max]` number of children per branching node
    pub branch_count: [u32; 2],
    /// `[lo, hi)` factor applied to the growth left over after the threshold
    pub decay: [f64; 2],
    /// Stroke width per unit of growth
    pub width_scale: f64,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            start: Point2D::new(0.0, -1.0), // bottom of the normalized screen
            start_angle: 90.0,              // pointing up
            branching_threshold: 0.03,
            angle_variation: 60.0,
            branch_count: [1, 5],
            decay: [0.6, 0.9],
            width_scale: 20.0,
        }
    }
}

impl TreeParams {
    /// Reject configurations that would collide seeds, never terminate, or draw nothing
    pub fn validate(&self) -> CanopyResult<()> {
        if !self.start.is_finite() {
            return Err(CanopyError::NonFiniteParameter("tree.start"));
        }
        if !self.start_angle.is_finite() {
            return Err(CanopyError::NonFiniteParameter("tree.start_angle"));
        }
        if !self.branching_threshold.is_finite() {
            return Err(CanopyError::NonFiniteParameter("tree.branching_threshold"));
        }
        if self.branching_threshold <= 0.0 {
            return Err(CanopyError::NonPositiveThreshold(self.branching_threshold));
        }
        if !self.angle_variation.is_finite() {
            return Err(CanopyError::NonFiniteParameter("tree.angle_variation"));
        }
        if self.angle_variation < 0.0 {
            return Err(CanopyError::NegativeAngleVariation(self.angle_variation));
        }

        let [min, max] = self.branch_count;
        if min > max {
            return Err(CanopyError::EmptyBranchCountRange { min, max });
        }
        // Sibling indices run 0..max, so max itself must fit below the stride
        if max as u64 >= SEED_STRIDE {
            return Err(CanopyError::BranchCountTooWide { max, stride: SEED_STRIDE });
        }

        let [lo, hi] = self.decay;
        if !(lo.is_finite() && hi.is_finite()) || lo <= 0.0 || lo > hi || hi > 1.0 {
            return Err(CanopyError::InvalidDecayRange { lo, hi });
        }

        if !self.width_scale.is_finite() {
            return Err(CanopyError::NonFiniteParameter("tree.width_scale"));
        }
        if self.width_scale <= 0.0 {
            return Err(CanopyError::NonPositiveWidthScale(self.width_scale));
        }
        Ok(())
    }
}
