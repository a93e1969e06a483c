//! Citation module - the final, quality-gated unit returned to the caller

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::candidate::OpinionId;
use crate::proposition::PropositionId;

/// Binding vs. persuasive authority classification
///
/// Binding: the decision controls the outcome in the run's jurisdiction
/// (its own highest court, or its controlling federal circuit).
/// Persuasive: influential but not controlling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorityLevel {
    /// Controls the outcome in the relevant jurisdiction
    Binding,

    /// Influential but not controlling
    Persuasive,
}

impl AuthorityLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorityLevel::Binding => "binding",
            AuthorityLevel::Persuasive => "persuasive",
        }
    }
}

/// How and when a citation was verified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Verification method, e.g. "search-index"
    pub method: String,

    /// Unix timestamp (seconds) of verification
    pub verified_at: u64,
}

/// A citation selected for delivery
///
/// Invariant: every SelectedCitation passed every quality filter and
/// relevance threshold, and the set as a whole passed the hard gate before
/// it is considered deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCitation {
    /// External opinion document id
    pub opinion_id: OpinionId,

    /// External cluster id, when known
    pub cluster_id: Option<u64>,

    /// Case name
    pub case_name: String,

    /// Citation string
    pub citation: String,

    /// Court the opinion issued from
    pub court: String,

    /// Filing date
    pub date_filed: Option<NaiveDate>,

    /// The proposition this citation supports
    pub proposition: PropositionId,

    /// Binding or persuasive in the run's jurisdiction
    pub authority: AuthorityLevel,

    /// Composite relevance score in [0, 1]
    pub relevance: f64,

    /// Verification metadata
    pub verification: VerificationRecord,
}
