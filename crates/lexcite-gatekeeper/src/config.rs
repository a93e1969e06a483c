//! Hard gate configuration

/// Configuration for categorical gate checks
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Minimum verified/total citation ratio (tier policy supplies this;
    /// stricter for higher tiers)
    pub verification_rate_minimum: f64,

    /// Require the executed-pipeline sentinel to be set
    pub require_pipeline_sentinel: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            verification_rate_minimum: 0.80,
            require_pipeline_sentinel: true,
        }
    }
}

impl GateConfig {
    /// Strictest configuration, used for the top service tier
    pub fn strict() -> Self {
        Self {
            verification_rate_minimum: 0.90,
            require_pipeline_sentinel: true,
        }
    }

    /// Gate with a specific verification-rate minimum
    pub fn with_rate_minimum(verification_rate_minimum: f64) -> Self {
        Self {
            verification_rate_minimum,
            ..Default::default()
        }
    }
}
