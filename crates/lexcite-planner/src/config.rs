//! Planner configuration

/// Configuration for query planning
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum authored queries taken per proposition
    pub max_queries_per_proposition: usize,

    /// Broad procedural sweep queries appended per permitted tier, as a
    /// guard against propositions whose authored queries return nothing.
    /// Empty disables the sweep.
    pub broad_fallback_queries: Vec<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_queries_per_proposition: 3,
            broad_fallback_queries: Vec::new(),
        }
    }
}

impl PlannerConfig {
    /// Planner with the generic procedural sweep enabled
    pub fn with_sweep() -> Self {
        Self {
            broad_fallback_queries: vec![
                "discovery obligations civil procedure".to_string(),
                "failure to respond to discovery sanctions".to_string(),
            ],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_queries_per_proposition, 3);
        assert!(config.broad_fallback_queries.is_empty());
    }

    #[test]
    fn test_sweep_config() {
        let config = PlannerConfig::with_sweep();
        assert!(!config.broad_fallback_queries.is_empty());
    }
}
