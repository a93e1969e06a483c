//! Jurisdiction filter
//!
//! Rejects candidates whose court name or citation format indicates the
//! wrong side of the state/federal boundary. The two signals are
//! independent: either one indicating a mismatch rejects the candidate.

use lexcite_domain::{JurisdictionType, OpinionHit};
use regex::Regex;

/// Court-name substrings that mark a federal court
const FEDERAL_COURT_MARKERS: &[&str] = &[
    "united states",
    "u.s. district",
    "u.s. court of appeals",
    "u.s. supreme court",
    "circuit court of appeals",
    "court of appeals for the",
    "federal",
    "bankruptcy",
];

/// Court-name substrings that mark a state court
const STATE_COURT_MARKERS: &[&str] = &[
    "judicial district",
    "judicial circuit",
    "parish",
    "county",
    "superior court",
];

/// Which independent signal flagged the mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchSignal {
    /// Court-name substring match
    CourtName,

    /// Citation-format regular-expression match
    CitationFormat,
}

impl MismatchSignal {
    /// Signal name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchSignal::CourtName => "court-name",
            MismatchSignal::CitationFormat => "citation-format",
        }
    }
}

/// Detects state/federal boundary violations in candidates
pub struct JurisdictionFilter {
    federal_reporter: Regex,
    state_reporter: Regex,
}

impl JurisdictionFilter {
    /// Compile the filter's citation patterns
    pub fn new() -> Self {
        // F./F.2d/F.3d/F.4th, F. Supp. (2d/3d), U.S., S. Ct., L. Ed.
        let federal_reporter = Regex::new(
            r"\b\d+\s+(?:F\.(?:2d|3d|4th)?|F\.\s?Supp\.(?:\s?[23]d)?|U\.S\.|S\.\s?Ct\.|L\.\s?Ed\.(?:\s?2d)?)\s+\d+",
        )
        .unwrap();

        // Regional reporters: So., P., N.E., N.W., S.E., S.W., A., plus
        // Cal. Rptr. and N.Y.S.
        let state_reporter = Regex::new(
            r"\b\d+\s+(?:So\.(?:\s?[23]d)?|P\.(?:[23]d)?|N\.E\.(?:[23]d)?|N\.W\.(?:2d)?|S\.E\.(?:2d)?|S\.W\.(?:[23]d)?|A\.(?:[23]d)?|Cal\.\s?Rptr\.(?:\s?[23]d)?|N\.Y\.S\.(?:2d|3d)?)\s+\d+",
        )
        .unwrap();

        Self {
            federal_reporter,
            state_reporter,
        }
    }

    /// Check a candidate against the expected jurisdiction side
    ///
    /// Returns the first signal indicating a mismatch, or `None` when the
    /// candidate is consistent with the expected side.
    pub fn mismatch(&self, hit: &OpinionHit, expected: JurisdictionType) -> Option<MismatchSignal> {
        let court = hit.court.to_lowercase();

        match expected {
            JurisdictionType::State => {
                // State court names may contain "district"; federal markers
                // are checked only after state markers clear the name.
                let state_named = STATE_COURT_MARKERS.iter().any(|m| court.contains(m));
                if !state_named && FEDERAL_COURT_MARKERS.iter().any(|m| court.contains(m)) {
                    return Some(MismatchSignal::CourtName);
                }
                if self.federal_reporter.is_match(&hit.citation)
                    && !self.state_reporter.is_match(&hit.citation)
                {
                    return Some(MismatchSignal::CitationFormat);
                }
            }
            JurisdictionType::Federal => {
                if STATE_COURT_MARKERS.iter().any(|m| court.contains(m)) {
                    return Some(MismatchSignal::CourtName);
                }
                if self.state_reporter.is_match(&hit.citation)
                    && !self.federal_reporter.is_match(&hit.citation)
                {
                    return Some(MismatchSignal::CitationFormat);
                }
            }
        }

        None
    }
}

impl Default for JurisdictionFilter {
    fn default() -> Self {
        Self::new()
    }
}
