//! Request and result types for a research run

use lexcite_domain::{Proposition, RunId, SelectedCitation, ServiceTier, VerificationSignals};
use lexcite_report::{CitationCounts, OutcomeClass};
use serde::{Deserialize, Serialize};

/// A request to research citations for one order requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRequest {
    /// Order/requirement identifier the run is keyed by
    pub order_id: String,

    /// Raw jurisdiction string, resolved by the engine
    pub jurisdiction: String,

    /// Controlling federal circuit, when the caller knows it
    #[serde(default)]
    pub controlling_circuit: Option<String>,

    /// Motion/requirement type, e.g. "Motion to Compel"
    pub motion_type: String,

    /// Service tier of the order
    pub service_tier: ServiceTier,

    /// Propositions the motion must support (optionally pre-derived by an
    /// upstream element-extraction stage)
    pub propositions: Vec<Proposition>,

    /// Resume an earlier run's checkpoint instead of starting fresh
    #[serde(default)]
    pub run_id: Option<RunId>,

    /// Externally-supplied verification signals for the hard gate
    #[serde(default)]
    pub signals: VerificationSignals,
}

/// Proof material for downstream verification audits
#[derive(Debug, Clone, Serialize)]
pub struct VerificationProof {
    /// Search tasks attempted
    pub searches_attempted: usize,

    /// Search tasks that ran without error
    pub searches_succeeded: usize,

    /// Raw candidates aggregated across tasks
    pub candidates_found: usize,

    /// Candidates rejected by the pipeline
    pub candidates_rejected: usize,

    /// Citations selected
    pub citations_selected: usize,

    /// Whether the hard gate passed
    pub gate_passed: bool,

    /// Non-blocking gate warnings
    pub gate_warnings: Vec<String>,
}

/// The caller-facing result of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct ResearchOutcome {
    /// Always true for a returned outcome; failures surface as errors
    pub success: bool,

    /// Run identifier (pass back to resume checkpoints)
    pub run_id: RunId,

    /// The selected citation bank
    pub citations: Vec<SelectedCitation>,

    /// Statutory citations looked up from the static table
    pub statutory_citations: Vec<String>,

    /// Aggregate citation counts
    pub counts: CitationCounts,

    /// Outcome classification of the citation count
    pub class: OutcomeClass,

    /// Whether the caller should flag the order for manual review
    pub flagged_for_review: bool,

    /// Explanatory quality notes
    pub quality_notes: Vec<String>,

    /// Propositions with at least one supporting citation
    pub elements_covered: usize,

    /// Total propositions in the request
    pub total_elements: usize,

    /// Audit/verification proof material
    pub verification_proof: VerificationProof,
}
