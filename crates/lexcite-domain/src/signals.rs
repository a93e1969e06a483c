//! Externally-supplied verification signals consumed by the hard gate

use serde::{Deserialize, Serialize};

/// Citation presence for one argument section of the motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCoverage {
    /// Section heading
    pub name: String,

    /// Number of citations attached to the section
    pub citation_count: usize,

    /// True when the section is explicitly marked as not requiring authority
    #[serde(default)]
    pub authority_optional: bool,
}

/// Signals produced outside this pipeline, fed to the hard gate
///
/// The gate treats these as ground truth: a single holding mismatch or
/// unverifiable citation blocks delivery no matter how the numeric scores
/// look.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationSignals {
    /// Citations whose source case does not support the attached proposition
    #[serde(default)]
    pub holding_mismatches: usize,

    /// Citations that could not be verified to exist at all
    #[serde(default)]
    pub not_found: usize,

    /// Per-section citation presence for the drafted motion
    #[serde(default)]
    pub sections: Vec<SectionCoverage>,
}
