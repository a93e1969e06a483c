//! Staged candidate processing

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use lexcite_domain::{
    Jurisdiction, OpinionId, Proposition, PropositionId, RawCandidate, ScoredCandidate,
};
use tracing::debug;

use crate::{
    JurisdictionFilter, PipelineConfig, QualityValidator, Rejection, RejectionReason,
    RelevanceScorer,
};

/// The pipeline's output: ranked survivors, coverage buckets, rejections
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Quality-clean candidates, ranked by composite score descending
    pub ranked: Vec<ScoredCandidate>,

    /// Surviving opinion ids per proposition, in rank order, for coverage
    /// accounting
    pub buckets: HashMap<PropositionId, Vec<OpinionId>>,

    /// Every rejection, with its machine-readable reason
    pub rejections: Vec<Rejection>,
}

impl PipelineOutput {
    /// Ids of propositions that have at least one clean candidate
    pub fn covered_propositions(&self) -> HashSet<PropositionId> {
        self.buckets
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, _)| *k)
            .collect()
    }
}

/// Deduplicates, filters, validates, and scores raw candidates
pub struct CandidatePipeline {
    config: PipelineConfig,
    filter: JurisdictionFilter,
    validator: QualityValidator,
    scorer: RelevanceScorer,
}

impl CandidatePipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        let scorer = RelevanceScorer::new(config.clone());
        Self {
            config,
            filter: JurisdictionFilter::new(),
            validator: QualityValidator::new(),
            scorer,
        }
    }

    /// Create a pipeline with default configuration
    pub fn default_config() -> Self {
        Self::new(PipelineConfig::default())
    }

    /// Process raw candidates into a ranked, quality-clean list
    ///
    /// Stage order is fixed; each stage strictly narrows the set and later
    /// stages are the more expensive ones. Idempotent: processing the same
    /// input again yields the same unique set regardless of input order of
    /// duplicates.
    pub fn process(
        &self,
        raw: Vec<RawCandidate>,
        propositions: &[Proposition],
        jurisdiction: &Jurisdiction,
        motion_type: &str,
        today: NaiveDate,
    ) -> PipelineOutput {
        let by_id: HashMap<PropositionId, &Proposition> =
            propositions.iter().map(|p| (p.id, p)).collect();

        let mut seen: HashSet<OpinionId> = HashSet::new();
        let mut rejections = Vec::new();
        let mut survivors: Vec<ScoredCandidate> = Vec::new();

        let total = raw.len();

        for candidate in raw {
            let opinion_id = candidate.opinion_id();
            let case_name = candidate.hit.case_name.clone();

            let reject = |reason: RejectionReason, rejections: &mut Vec<Rejection>| {
                rejections.push(Rejection {
                    opinion_id,
                    case_name: case_name.clone(),
                    reason,
                });
            };

            // 1. Deduplication, first occurrence wins
            if !seen.insert(opinion_id) {
                reject(RejectionReason::Duplicate, &mut rejections);
                continue;
            }

            // 2. Jurisdiction boundary
            if let Some(signal) = self.filter.mismatch(&candidate.hit, jurisdiction.kind()) {
                reject(RejectionReason::WrongJurisdiction { signal }, &mut rejections);
                continue;
            }

            // 3. Quality predicates
            if let Some(reason) = self.validator.validate(&candidate.hit, jurisdiction.kind(), today)
            {
                reject(reason, &mut rejections);
                continue;
            }

            // 4. Topical gate (binary, not a ranking signal)
            let Some(proposition) = by_id.get(&candidate.proposition) else {
                // task carried an unknown proposition id; treat as noise
                reject(
                    RejectionReason::BelowTopicalThreshold {
                        score: 0.0,
                        threshold: self.config.topical_threshold,
                    },
                    &mut rejections,
                );
                continue;
            };
            let topical = self.scorer.topical(&candidate, proposition, motion_type);
            if topical < self.config.topical_threshold {
                reject(
                    RejectionReason::BelowTopicalThreshold {
                        score: topical,
                        threshold: self.config.topical_threshold,
                    },
                    &mut rejections,
                );
                continue;
            }

            // 5. Composite score and noise floor
            let score = self.scorer.composite(&candidate, today);
            if score < self.config.composite_floor {
                reject(
                    RejectionReason::BelowCompositeFloor {
                        score,
                        floor: self.config.composite_floor,
                    },
                    &mut rejections,
                );
                continue;
            }

            survivors.push(ScoredCandidate {
                raw: candidate,
                topical,
                score,
            });
        }

        // Rank descending; opinion id breaks ties deterministically
        survivors.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.opinion_id().cmp(&b.opinion_id()))
        });

        let mut buckets: HashMap<PropositionId, Vec<OpinionId>> = HashMap::new();
        for prop in propositions {
            buckets.entry(prop.id).or_default();
        }
        for candidate in &survivors {
            buckets
                .entry(candidate.raw.proposition)
                .or_default()
                .push(candidate.opinion_id());
        }

        debug!(
            total,
            survivors = survivors.len(),
            rejections = rejections.len(),
            "candidate pipeline complete"
        );

        PipelineOutput {
            ranked: survivors,
            buckets,
            rejections,
        }
    }
}
