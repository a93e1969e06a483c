//! Pipeline configuration
//!
//! The numeric thresholds here are policy constants tuned empirically;
//! they are configuration, not invariants, and callers may override them.

/// Configuration for candidate filtering and scoring
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Topical-relevance cutoff: candidates below it are dropped outright
    pub topical_threshold: f64,

    /// Composite-score floor: survivors below it are dropped as noise
    pub composite_floor: f64,

    /// Weight of keyword overlap with the originating query
    pub keyword_weight: f64,

    /// Weight of court-authority/jurisdiction match
    pub authority_weight: f64,

    /// Weight of recency
    pub recency_weight: f64,

    /// Horizon over which recency decays linearly to zero, in years
    pub recency_horizon_years: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            topical_threshold: 0.70,
            composite_floor: 0.30,
            keyword_weight: 0.40,
            authority_weight: 0.30,
            recency_weight: 0.30,
            recency_horizon_years: 30,
        }
    }
}

impl PipelineConfig {
    /// A permissive configuration for exploratory runs: no topical gate,
    /// low floor
    pub fn permissive() -> Self {
        Self {
            topical_threshold: 0.0,
            composite_floor: 0.1,
            ..Default::default()
        }
    }

    /// Sum of the composite weights (normalized at scoring time)
    pub fn weight_sum(&self) -> f64 {
        self.keyword_weight + self.authority_weight + self.recency_weight
    }
}
