use serde::{Serialize, Deserialize};
use crate::animation::{GrowthFormula, WindFormula};
use crate::error::CanopyResult;
use crate::growth::TreeParams;
use crate::render::Palette;

/// Everything that shapes the animation, loadable from YAML.
///
/// ```yaml
/// tree:
///   branching_threshold: 0.03
///   branch_count: [1, 5]
/// growth:
///   kind: lifespan
///   speed: 0.05
///   lifespan: 0.6
/// wind:
///   max_angle: 15
/// palette:
///   background: "#000"
///   foreground: white
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CanopyConfig {
    pub tree: TreeParams,
    pub growth: GrowthFormula,
    pub wind: WindFormula,
    pub palette: Palette,
}

impl CanopyConfig {
    /// Parse and validate
    pub fn from_yaml(yaml: &str) -> CanopyResult<Self> {
        let config: CanopyConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CanopyResult<()> {
        self.tree.validate()?;
        self.growth.validate()?;
        self.wind.validate()
    }
}
