//! Outcome classification and diagnostic aggregation

use std::collections::HashMap;

use lexcite_domain::{AuthorityLevel, SelectedCitation};
use serde::Serialize;

/// How a run's citation count classifies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    /// Count is zero or below the hard-stop minimum: the run aborts and
    /// the requirement is flagged for manual research
    HardFailure,

    /// Count is usable but below the ideal: the run succeeds, flagged for
    /// manual review
    FlaggedSuccess,

    /// Count meets the ideal minimum
    CleanSuccess,
}

/// Count thresholds for outcome classification
///
/// The hard stop is tier-independent; the ideal minimum is the point at
/// which no review flag is raised.
#[derive(Debug, Clone)]
pub struct OutcomePolicy {
    /// Below this count (including zero) the run hard-fails
    pub hard_stop_minimum: usize,

    /// At or above this count the run is clean
    pub ideal_minimum: usize,
}

impl Default for OutcomePolicy {
    fn default() -> Self {
        Self {
            hard_stop_minimum: 3,
            ideal_minimum: 6,
        }
    }
}

impl OutcomePolicy {
    /// Classify a citation count
    ///
    /// Pure function of count and policy.
    pub fn classify(&self, count: usize) -> OutcomeClass {
        if count < self.hard_stop_minimum {
            OutcomeClass::HardFailure
        } else if count < self.ideal_minimum {
            OutcomeClass::FlaggedSuccess
        } else {
            OutcomeClass::CleanSuccess
        }
    }
}

/// Aggregate counts over the final selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CitationCounts {
    /// Total citations selected
    pub total: usize,

    /// Binding-authority citations
    pub binding: usize,

    /// Persuasive-authority citations
    pub persuasive: usize,

    /// Citations per source court
    pub by_court: HashMap<String, usize>,
}

impl CitationCounts {
    /// Tally counts from a selection
    pub fn tally(citations: &[SelectedCitation]) -> Self {
        let mut counts = Self {
            total: citations.len(),
            ..Default::default()
        };
        for citation in citations {
            match citation.authority {
                AuthorityLevel::Binding => counts.binding += 1,
                AuthorityLevel::Persuasive => counts.persuasive += 1,
            }
            *counts.by_court.entry(citation.court.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// The reporter's structured output
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeReport {
    /// Classification of the citation count
    pub class: OutcomeClass,

    /// Aggregate citation counts
    pub counts: CitationCounts,

    /// Search tasks attempted
    pub searches_attempted: usize,

    /// Search tasks that ran without error
    pub searches_succeeded: usize,

    /// Whether the caller should flag the order for manual review
    pub flagged_for_review: bool,

    /// Explanatory quality notes for downstream handling
    pub quality_notes: Vec<String>,
}

/// Builds outcome reports from a final selection and search diagnostics
pub struct OutcomeReporter {
    policy: OutcomePolicy,
}

impl OutcomeReporter {
    /// Create a reporter with the given policy
    pub fn new(policy: OutcomePolicy) -> Self {
        Self { policy }
    }

    /// Create a reporter with default policy
    pub fn default_policy() -> Self {
        Self::new(OutcomePolicy::default())
    }

    /// The policy in effect
    pub fn policy(&self) -> &OutcomePolicy {
        &self.policy
    }

    /// Build the report for a run
    pub fn report(
        &self,
        citations: &[SelectedCitation],
        searches_attempted: usize,
        searches_succeeded: usize,
    ) -> OutcomeReport {
        let class = self.policy.classify(citations.len());
        let counts = CitationCounts::tally(citations);

        let mut quality_notes = Vec::new();
        let flagged_for_review = match class {
            OutcomeClass::HardFailure => {
                quality_notes.push(format!(
                    "citation count {} below hard-stop minimum {}; requirement needs manual research",
                    citations.len(),
                    self.policy.hard_stop_minimum
                ));
                true
            }
            OutcomeClass::FlaggedSuccess => {
                quality_notes.push(format!(
                    "citation count {} below ideal minimum {}; manual review recommended",
                    citations.len(),
                    self.policy.ideal_minimum
                ));
                true
            }
            OutcomeClass::CleanSuccess => false,
        };

        if searches_attempted > 0 && searches_succeeded < searches_attempted {
            quality_notes.push(format!(
                "{} of {} searches failed",
                searches_attempted - searches_succeeded,
                searches_attempted
            ));
        }

        OutcomeReport {
            class,
            counts,
            searches_attempted,
            searches_succeeded,
            flagged_for_review,
            quality_notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lexcite_domain::{OpinionId, PropositionId, VerificationRecord};

    fn citation(id: u64, authority: AuthorityLevel, court: &str) -> SelectedCitation {
        SelectedCitation {
            opinion_id: OpinionId(id),
            cluster_id: None,
            case_name: format!("Case {} v. Other", id),
            citation: format!("{} So.3d {}", 100 + id, id),
            court: court.to_string(),
            date_filed: NaiveDate::from_ymd_opt(2020, 1, 1),
            proposition: PropositionId::from_value(1),
            authority,
            relevance: 0.9,
            verification: VerificationRecord {
                method: "search-index".to_string(),
                verified_at: 0,
            },
        }
    }

    fn bank(n: usize) -> Vec<SelectedCitation> {
        (0..n as u64)
            .map(|i| {
                let authority = if i % 2 == 0 {
                    AuthorityLevel::Binding
                } else {
                    AuthorityLevel::Persuasive
                };
                citation(i + 1, authority, "Louisiana Supreme Court")
            })
            .collect()
    }

    #[test]
    fn test_classification_grid() {
        let policy = OutcomePolicy::default(); // hard stop 3, ideal 6
        assert_eq!(policy.classify(0), OutcomeClass::HardFailure);
        assert_eq!(policy.classify(1), OutcomeClass::HardFailure);
        assert_eq!(policy.classify(2), OutcomeClass::HardFailure);
        assert_eq!(policy.classify(3), OutcomeClass::FlaggedSuccess);
        assert_eq!(policy.classify(5), OutcomeClass::FlaggedSuccess);
        assert_eq!(policy.classify(6), OutcomeClass::CleanSuccess);
        assert_eq!(policy.classify(20), OutcomeClass::CleanSuccess);
    }

    #[test]
    fn test_hard_failure_is_flagged_with_note() {
        let reporter = OutcomeReporter::default_policy();
        let report = reporter.report(&bank(1), 4, 4);

        assert_eq!(report.class, OutcomeClass::HardFailure);
        assert!(report.flagged_for_review);
        assert!(report.quality_notes[0].contains("manual research"));
    }

    #[test]
    fn test_flagged_success_keeps_processing() {
        let reporter = OutcomeReporter::default_policy();
        let report = reporter.report(&bank(4), 4, 4);

        assert_eq!(report.class, OutcomeClass::FlaggedSuccess);
        assert!(report.flagged_for_review);
        assert!(report.quality_notes[0].contains("manual review"));
    }

    #[test]
    fn test_clean_success_has_no_flag() {
        let reporter = OutcomeReporter::default_policy();
        let report = reporter.report(&bank(8), 4, 4);

        assert_eq!(report.class, OutcomeClass::CleanSuccess);
        assert!(!report.flagged_for_review);
        assert!(report.quality_notes.is_empty());
    }

    #[test]
    fn test_failed_searches_noted_without_flag() {
        let reporter = OutcomeReporter::default_policy();
        let report = reporter.report(&bank(8), 10, 7);

        assert!(!report.flagged_for_review);
        assert_eq!(report.quality_notes.len(), 1);
        assert!(report.quality_notes[0].contains("3 of 10"));
    }

    #[test]
    fn test_counts_tally() {
        let citations = vec![
            citation(1, AuthorityLevel::Binding, "Louisiana Supreme Court"),
            citation(2, AuthorityLevel::Persuasive, "La. App. 1 Cir."),
            citation(3, AuthorityLevel::Persuasive, "La. App. 1 Cir."),
        ];
        let counts = CitationCounts::tally(&citations);

        assert_eq!(counts.total, 3);
        assert_eq!(counts.binding, 1);
        assert_eq!(counts.persuasive, 2);
        assert_eq!(counts.by_court["La. App. 1 Cir."], 2);
    }
}
