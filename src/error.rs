/// Errors raised while configuring or attaching the canopy
#[derive(thiserror::Error, Debug)]
pub enum CanopyError {
    #[error("branching threshold must be positive, got {0}")]
    NonPositiveThreshold(f64),

    #[error("branch count upper bound {max} must stay below the seed stride {stride}")]
    BranchCountTooWide { max: u32, stride: u64 },

    #[error("branch count range {min}..={max} is empty")]
    EmptyBranchCountRange { min: u32, max: u32 },

    #[error("decay range [{lo}, {hi}) must satisfy 0 < lo <= hi <= 1")]
    InvalidDecayRange { lo: f64, hi: f64 },

    #[error("width scale must be positive, got {0}")]
    NonPositiveWidthScale(f64),

    #[error("angle variation must not be negative, got {0}")]
    NegativeAngleVariation(f64),

    #[error("growth lifespan must be positive, got {0}")]
    NonPositiveLifespan(f64),

    #[error("growth lifespan {lifespan} exceeds the maximum root growth {max}")]
    LifespanTooLong { lifespan: f64, max: f64 },

    #[error("parameter `{0}` must be finite")]
    NonFiniteParameter(&'static str),

    #[error("unrecognized color `{0}`")]
    InvalidColor(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("browser error: {0}")]
    Browser(String),
}

impl CanopyError {
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }
}

impl From<wasm_bindgen::JsValue> for CanopyError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(format!("{:?}", value))
    }
}

pub type CanopyResult<T> = Result<T, CanopyError>;
