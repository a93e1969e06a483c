//! Query planning logic

use std::collections::{HashMap, HashSet};

use lexcite_domain::{CourtTier, Jurisdiction, Proposition, SearchTask};
use tracing::{debug, warn};

use crate::PlannerConfig;

/// The planner's output: an ordered task list plus per-tier diagnostics
#[derive(Debug, Clone)]
pub struct TaskPlan {
    /// Tasks in emission order
    pub tasks: Vec<SearchTask>,

    /// Task count per court tier
    pub per_tier: HashMap<CourtTier, usize>,
}

impl TaskPlan {
    /// Task count for one tier
    pub fn tier_count(&self, tier: CourtTier) -> usize {
        self.per_tier.get(&tier).copied().unwrap_or(0)
    }

    /// Total task count
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the plan is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Plans search tasks from propositions and a resolved jurisdiction
pub struct QueryPlanner {
    config: PlannerConfig,
}

impl QueryPlanner {
    /// Create a planner with the given configuration
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Create a planner with default configuration
    pub fn default_config() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Plan tasks for a run
    ///
    /// For each proposition, up to the configured query cap of its authored
    /// queries is emitted once per tier permitted by the jurisdiction.
    /// Tasks whose normalized (query, tier) pair was already emitted are
    /// dropped to avoid wasting external calls. Broad sweep queries, when
    /// configured, are appended last under the same tier restriction.
    pub fn plan(&self, propositions: &[Proposition], jurisdiction: &Jurisdiction) -> TaskPlan {
        let tiers = jurisdiction.permitted_tiers();
        let mut tasks = Vec::new();
        let mut per_tier: HashMap<CourtTier, usize> = HashMap::new();
        let mut seen: HashSet<(String, CourtTier)> = HashSet::new();

        for prop in propositions {
            if prop.queries.is_empty() {
                warn!(proposition = %prop.id, name = %prop.name, "proposition has no queries, skipping");
                continue;
            }

            for query in prop.queries.iter().take(self.config.max_queries_per_proposition) {
                for &tier in tiers {
                    if !seen.insert((normalize_query(query), tier)) {
                        continue;
                    }
                    tasks.push(SearchTask::new(
                        query.clone(),
                        prop.id,
                        tier,
                        prop.fallback_queries.clone(),
                    ));
                    *per_tier.entry(tier).or_insert(0) += 1;
                }
            }
        }

        // Sweep queries attach to the first critical proposition (or the
        // first proposition) so their hits land in a real coverage bucket.
        if !self.config.broad_fallback_queries.is_empty() {
            let anchor = propositions
                .iter()
                .find(|p| p.critical)
                .or_else(|| propositions.first());

            if let Some(anchor) = anchor {
                for query in &self.config.broad_fallback_queries {
                    for &tier in tiers {
                        if !seen.insert((normalize_query(query), tier)) {
                            continue;
                        }
                        tasks.push(SearchTask::new(query.clone(), anchor.id, tier, Vec::new()));
                        *per_tier.entry(tier).or_insert(0) += 1;
                    }
                }
            }
        }

        debug!(
            tasks = tasks.len(),
            tiers = tiers.len(),
            jurisdiction = jurisdiction.name(),
            "planned search tasks"
        );

        TaskPlan { tasks, per_tier }
    }
}

/// Normalize query text for deduplication: lowercase, whitespace collapsed
fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
