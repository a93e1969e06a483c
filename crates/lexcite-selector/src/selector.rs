//! Coverage-first greedy selection and authority classification

use std::collections::HashSet;

use lexcite_domain::{
    AuthorityLevel, CourtTier, Jurisdiction, JurisdictionType, OpinionId, Proposition,
    ScoredCandidate, SelectedCitation, VerificationRecord,
};
use lexcite_pipeline::PipelineOutput;
use tracing::debug;

/// Configuration for citation selection
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Target size of the citation bank (tier policy supplies this)
    pub target_citations: usize,

    /// Verification method stamped on every selection
    pub verification_method: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            target_citations: 6,
            verification_method: "search-index".to_string(),
        }
    }
}

impl SelectionConfig {
    /// Config with a specific target count
    pub fn with_target(target_citations: usize) -> Self {
        Self {
            target_citations,
            ..Default::default()
        }
    }
}

/// Selects and classifies the final citation bank
pub struct Selector {
    config: SelectionConfig,
}

impl Selector {
    /// Create a selector with the given configuration
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Create a selector with default configuration
    pub fn default_config() -> Self {
        Self::new(SelectionConfig::default())
    }

    /// Select citations from pipeline output
    ///
    /// Phase A walks critical propositions in declaration order and takes
    /// each one's highest-ranked unused candidate. Phase B fills from the
    /// global ranking, skipping used opinion ids, until the target count
    /// is reached or candidates are exhausted. The output never contains
    /// duplicate opinion ids.
    pub fn select(
        &self,
        output: &PipelineOutput,
        propositions: &[Proposition],
        jurisdiction: &Jurisdiction,
        verified_at: u64,
    ) -> Vec<SelectedCitation> {
        let mut used: HashSet<OpinionId> = HashSet::new();
        let mut selected: Vec<SelectedCitation> = Vec::new();

        // Phase A: baseline coverage for critical propositions
        for prop in propositions.iter().filter(|p| p.critical) {
            if selected.len() >= self.config.target_citations {
                break;
            }
            let pick = output
                .ranked
                .iter()
                .find(|c| c.raw.proposition == prop.id && !used.contains(&c.opinion_id()));
            if let Some(candidate) = pick {
                used.insert(candidate.opinion_id());
                selected.push(self.to_citation(candidate, jurisdiction, verified_at));
            }
        }

        // Phase B: fill from the global ranking
        for candidate in &output.ranked {
            if selected.len() >= self.config.target_citations {
                break;
            }
            if used.insert(candidate.opinion_id()) {
                selected.push(self.to_citation(candidate, jurisdiction, verified_at));
            }
        }

        debug!(
            selected = selected.len(),
            target = self.config.target_citations,
            "selection complete"
        );

        selected
    }

    /// Classify a candidate's authority in the run's jurisdiction
    ///
    /// The jurisdiction's own highest court is binding; for federal runs,
    /// the U.S. Supreme Court and the controlling circuit are binding.
    /// Everything else is persuasive.
    pub fn classify(candidate: &ScoredCandidate, jurisdiction: &Jurisdiction) -> AuthorityLevel {
        let court = candidate.raw.hit.court.to_lowercase();

        match jurisdiction.kind() {
            JurisdictionType::State => {
                if candidate.raw.tier == CourtTier::Tier1 {
                    AuthorityLevel::Binding
                } else {
                    AuthorityLevel::Persuasive
                }
            }
            JurisdictionType::Federal => {
                if court.contains("supreme court of the united states")
                    || court.contains("u.s. supreme court")
                {
                    return AuthorityLevel::Binding;
                }
                match jurisdiction.controlling_circuit() {
                    Some(circuit) if court.contains(&circuit.to_lowercase()) => {
                        AuthorityLevel::Binding
                    }
                    _ => AuthorityLevel::Persuasive,
                }
            }
        }
    }

    fn to_citation(
        &self,
        candidate: &ScoredCandidate,
        jurisdiction: &Jurisdiction,
        verified_at: u64,
    ) -> SelectedCitation {
        SelectedCitation {
            opinion_id: candidate.opinion_id(),
            cluster_id: candidate.raw.hit.cluster_id,
            case_name: candidate.raw.hit.case_name.clone(),
            citation: candidate.raw.hit.citation.clone(),
            court: candidate.raw.hit.court.clone(),
            date_filed: candidate.raw.hit.date_filed,
            proposition: candidate.raw.proposition,
            authority: Self::classify(candidate, jurisdiction),
            relevance: candidate.score,
            verification: VerificationRecord {
                method: self.config.verification_method.clone(),
                verified_at,
            },
        }
    }
}
