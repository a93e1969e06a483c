//! Engine configuration: per-tier policy plus stage configs

use lexcite_domain::ServiceTier;
use lexcite_pipeline::PipelineConfig;
use lexcite_planner::PlannerConfig;
use lexcite_report::OutcomePolicy;
use lexcite_search::SearchConfig;

/// Policy for one service tier
#[derive(Debug, Clone)]
pub struct TierPolicy {
    /// Target citation-bank size
    pub target_citations: usize,

    /// Minimum verified/total ratio the hard gate enforces
    pub verification_rate_minimum: f64,
}

/// Full engine configuration
///
/// Every numeric threshold in the pipeline lives here or in a nested stage
/// config; stage logic never hard-codes policy.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Query planning
    pub planner: PlannerConfig,

    /// Search execution
    pub search: SearchConfig,

    /// Candidate filtering and scoring
    pub pipeline: PipelineConfig,

    /// Citation-count outcome thresholds
    pub outcome: OutcomePolicy,

    /// Policy for the standard tier
    pub standard: TierPolicy,

    /// Policy for the professional tier
    pub professional: TierPolicy,

    /// Policy for the premium tier
    pub premium: TierPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            planner: PlannerConfig::default(),
            search: SearchConfig::default(),
            pipeline: PipelineConfig::default(),
            outcome: OutcomePolicy::default(),
            standard: TierPolicy {
                target_citations: 6,
                verification_rate_minimum: 0.80,
            },
            professional: TierPolicy {
                target_citations: 10,
                verification_rate_minimum: 0.85,
            },
            premium: TierPolicy {
                target_citations: 14,
                verification_rate_minimum: 0.90,
            },
        }
    }
}

impl EngineConfig {
    /// The policy for a service tier
    pub fn policy(&self, tier: ServiceTier) -> &TierPolicy {
        match tier {
            ServiceTier::Standard => &self.standard,
            ServiceTier::Professional => &self.professional,
            ServiceTier::Premium => &self.premium,
        }
    }
}
