//! Time-driven scalar inputs of the tree.
//!
//! Every formula here is a pure, periodic function of elapsed seconds: nothing
//! accumulates between frames, so the animation can run indefinitely without drift.

use serde::{Serialize, Deserialize};
use crate::error::{CanopyError, CanopyResult};

/// How the root "stem length budget" evolves over time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrowthFormula {
    /// `(sin(t * frequency) + 1) / 4`, oscillates within [0, 0.5]
    Breathing { frequency: f64 },
    /// `(t * speed) mod lifespan`: grows from nothing, then starts over
    Lifespan { speed: f64, lifespan: f64 },
}

impl Default for GrowthFormula {
    fn default() -> Self {
        GrowthFormula::Breathing { frequency: 1.0 }
    }
}

/// Largest root growth a formula may reach. Segment count grows exponentially with it.
pub const MAX_ROOT_GROWTH: f64 = 1.0;

impl GrowthFormula {
    /// Sapling cycle: 12 seconds from nothing to 0.6, then restart
    pub const SAPLING: GrowthFormula = GrowthFormula::Lifespan { speed: 0.05, lifespan: 0.6 };

    pub fn sample(&self, t: f64) -> f64 {
        match *self {
            GrowthFormula::Breathing { frequency } => ((t * frequency).sin() + 1.0) / 4.0,
            GrowthFormula::Lifespan { speed, lifespan } => (t * speed).rem_euclid(lifespan),
        }
    }

    pub fn validate(&self) -> CanopyResult<()> {
        match *self {
            GrowthFormula::Breathing { frequency } => {
                if !frequency.is_finite() {
                    return Err(CanopyError::NonFiniteParameter("growth.frequency"));
                }
            }
            GrowthFormula::Lifespan { speed, lifespan } => {
                if !speed.is_finite() {
                    return Err(CanopyError::NonFiniteParameter("growth.speed"));
                }
                if !lifespan.is_finite() {
                    return Err(CanopyError::NonFiniteParameter("growth.lifespan"));
                }
                if lifespan <= 0.0 {
                    return Err(CanopyError::NonPositiveLifespan(lifespan));
                }
                if lifespan > MAX_ROOT_GROWTH {
                    return Err(CanopyError::LifespanTooLong { lifespan, max: MAX_ROOT_GROWTH });
                }
            }
        }
        Ok(())
    }
}

/// Global sway applied to every branch heading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindFormula {
    /// Angular frequency of the sway (radians per second)
    pub speed: f64,
    /// Peak twist in degrees
    pub max_angle: f64,
}

impl Default for WindFormula {
    fn default() -> Self {
        Self {
            speed: 1.0,
            max_angle: 10.0,
        }
    }
}

impl WindFormula {
    /// `sin(t * speed) * max_angle`, in degrees
    pub fn sample(&self, t: f64) -> f64 {
        (t * self.speed).sin() * self.max_angle
    }

    pub fn validate(&self) -> CanopyResult<()> {
        if !self.speed.is_finite() {
            return Err(CanopyError::NonFiniteParameter("wind.speed"));
        }
        if !self.max_angle.is_finite() {
            return Err(CanopyError::NonFiniteParameter("wind.max_angle"));
        }
        Ok(())
    }
}

/// Formula outputs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameParams {
    pub growth: f64,
    pub wind_twist: f64,
}

impl FrameParams {
    pub fn at(t: f64, growth: &GrowthFormula, wind: &WindFormula) -> Self {
        Self {
            growth: growth.sample(t),
            wind_twist: wind.sample(t),
        }
    }
}
