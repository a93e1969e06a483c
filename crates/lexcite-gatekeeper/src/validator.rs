//! Hard gate validation logic

use std::fmt;

use lexcite_domain::{AuthorityLevel, SelectedCitation, VerificationSignals};

use crate::GateConfig;

/// Input to one gate evaluation
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    /// The final citation selection
    pub citations: &'a [SelectedCitation],

    /// Externally-supplied verification signals
    pub signals: &'a VerificationSignals,

    /// Sentinel: the search/verification pipeline actually ran to
    /// completion (set by the engine after all batches executed, never
    /// inferred from "no exception was thrown")
    pub search_pipeline_completed: bool,
}

/// A categorical gate failure
#[derive(Debug, Clone, PartialEq)]
pub enum GateFailure {
    /// One or more citations do not support the proposition they are
    /// attached to
    HoldingMismatches {
        /// Mismatch count
        count: usize,
    },

    /// One or more citations could not be verified to exist
    UnverifiableCitations {
        /// Not-found count
        count: usize,
    },

    /// The verification/search pipeline did not run to completion
    PipelineIncomplete,

    /// An argument section has no citation and is not marked as exempt
    UncitedSection {
        /// Section heading
        section: String,
    },

    /// Verified/total ratio fell below the tier minimum
    VerificationRateBelowMinimum {
        /// Observed ratio
        rate: f64,
        /// Required minimum
        required: f64,
    },
}

impl fmt::Display for GateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateFailure::HoldingMismatches { count } => {
                write!(f, "{} citation(s) with holding mismatch", count)
            }
            GateFailure::UnverifiableCitations { count } => {
                write!(f, "{} citation(s) could not be verified to exist", count)
            }
            GateFailure::PipelineIncomplete => {
                write!(f, "verification pipeline did not run to completion")
            }
            GateFailure::UncitedSection { section } => {
                write!(f, "section '{}' has no citation and is not exempt", section)
            }
            GateFailure::VerificationRateBelowMinimum { rate, required } => {
                write!(f, "verification rate {:.2} below required {:.2}", rate, required)
            }
        }
    }
}

/// Result of one gate evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct HardGateResult {
    /// Whether every categorical check held
    pub passes: bool,

    /// Categorical failures; any entry forces `passes = false`
    pub failures: Vec<GateFailure>,

    /// Non-blocking quality warnings
    pub warnings: Vec<String>,
}

impl HardGateResult {
    /// Failure descriptions, for audit events and error payloads
    pub fn failure_strings(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.to_string()).collect()
    }
}

/// The hard gate: categorical checks independent of numeric scores
pub struct HardGate {
    config: GateConfig,
}

impl HardGate {
    /// Create a gate with the given configuration
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Create a gate with default configuration
    pub fn default_config() -> Self {
        Self::new(GateConfig::default())
    }

    /// Evaluate every categorical check
    ///
    /// Pure function of the input; all failures are collected, not just
    /// the first.
    pub fn validate(&self, input: &GateInput<'_>) -> HardGateResult {
        let mut failures = Vec::new();
        let mut warnings = Vec::new();

        if input.signals.holding_mismatches > 0 {
            failures.push(GateFailure::HoldingMismatches {
                count: input.signals.holding_mismatches,
            });
        }

        if input.signals.not_found > 0 {
            failures.push(GateFailure::UnverifiableCitations {
                count: input.signals.not_found,
            });
        }

        if self.config.require_pipeline_sentinel && !input.search_pipeline_completed {
            failures.push(GateFailure::PipelineIncomplete);
        }

        for section in &input.signals.sections {
            if section.citation_count == 0 && !section.authority_optional {
                failures.push(GateFailure::UncitedSection {
                    section: section.name.clone(),
                });
            }
        }

        let rate = self.verification_rate(input);
        if rate < self.config.verification_rate_minimum {
            failures.push(GateFailure::VerificationRateBelowMinimum {
                rate,
                required: self.config.verification_rate_minimum,
            });
        }

        if !input.citations.is_empty()
            && !input.citations.iter().any(|c| c.authority == AuthorityLevel::Binding)
        {
            warnings.push("selection contains no binding authority".to_string());
        }

        HardGateResult {
            passes: failures.is_empty(),
            failures,
            warnings,
        }
    }

    /// Verified/total ratio; an empty selection verifies nothing
    fn verification_rate(&self, input: &GateInput<'_>) -> f64 {
        let total = input.citations.len();
        if total == 0 {
            return 0.0;
        }
        let bad = input.signals.holding_mismatches + input.signals.not_found;
        let verified = total.saturating_sub(bad);
        verified as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lexcite_domain::{
        OpinionId, PropositionId, SectionCoverage, VerificationRecord,
    };

    fn citation(id: u64, authority: AuthorityLevel) -> SelectedCitation {
        SelectedCitation {
            opinion_id: OpinionId(id),
            cluster_id: None,
            case_name: format!("Case {} v. Other", id),
            citation: format!("{} So.3d {}", 100 + id, id),
            court: "Louisiana Supreme Court".to_string(),
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
        (0..n as u64).map(|i| citation(i + 1, AuthorityLevel::Binding)).collect()
    }

    #[test]
    fn test_clean_run_passes() {
        let gate = HardGate::default_config();
        let citations = bank(6);
        let signals = VerificationSignals::default();
        let result = gate.validate(&GateInput {
            citations: &citations,
            signals: &signals,
            search_pipeline_completed: true,
        });

        assert!(result.passes);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_holding_mismatch_fails_regardless_of_scores() {
        let gate = HardGate::default_config();
        let citations = bank(20); // large, high-relevance bank
        let signals = VerificationSignals {
            holding_mismatches: 1,
            ..Default::default()
        };
        let result = gate.validate(&GateInput {
            citations: &citations,
            signals: &signals,
            search_pipeline_completed: true,
        });

        assert!(!result.passes);
        assert!(result
            .failures
            .iter()
            .any(|f| matches!(f, GateFailure::HoldingMismatches { count: 1 })));
    }

    #[test]
    fn test_not_found_fails() {
        let gate = HardGate::default_config();
        let citations = bank(20);
        let signals = VerificationSignals {
            not_found: 2,
            ..Default::default()
        };
        let result = gate.validate(&GateInput {
            citations: &citations,
            signals: &signals,
            search_pipeline_completed: true,
        });

        assert!(!result.passes);
        assert!(result
            .failures
            .iter()
            .any(|f| matches!(f, GateFailure::UnverifiableCitations { count: 2 })));
    }

    #[test]
    fn test_missing_sentinel_fails() {
        let gate = HardGate::default_config();
        let citations = bank(6);
        let signals = VerificationSignals::default();
        let result = gate.validate(&GateInput {
            citations: &citations,
            signals: &signals,
            search_pipeline_completed: false,
        });

        assert!(!result.passes);
        assert!(result.failures.contains(&GateFailure::PipelineIncomplete));
    }

    #[test]
    fn test_uncited_section_fails_unless_exempt() {
        let gate = HardGate::default_config();
        let citations = bank(6);
        let signals = VerificationSignals {
            sections: vec![
                SectionCoverage {
                    name: "Argument I".to_string(),
                    citation_count: 0,
                    authority_optional: false,
                },
                SectionCoverage {
                    name: "Background".to_string(),
                    citation_count: 0,
                    authority_optional: true,
                },
            ],
            ..Default::default()
        };
        let result = gate.validate(&GateInput {
            citations: &citations,
            signals: &signals,
            search_pipeline_completed: true,
        });

        assert!(!result.passes);
        assert_eq!(result.failures.len(), 1);
        assert!(matches!(
            &result.failures[0],
            GateFailure::UncitedSection { section } if section == "Argument I"
        ));
    }

    #[test]
    fn test_verification_rate_below_tier_minimum_fails() {
        let gate = HardGate::new(GateConfig::strict());
        let citations = bank(10);
        // 1 mismatch + 1 not-found -> 0.80, below the strict 0.90
        // (both also fail categorically on their own)
        let signals = VerificationSignals {
            holding_mismatches: 1,
            not_found: 1,
            ..Default::default()
        };
        let result = gate.validate(&GateInput {
            citations: &citations,
            signals: &signals,
            search_pipeline_completed: true,
        });

        assert!(!result.passes);
        assert!(result.failures.iter().any(|f| matches!(
            f,
            GateFailure::VerificationRateBelowMinimum { required, .. } if *required == 0.90
        )));
    }

    #[test]
    fn test_empty_selection_fails_rate_check() {
        let gate = HardGate::default_config();
        let signals = VerificationSignals::default();
        let result = gate.validate(&GateInput {
            citations: &[],
            signals: &signals,
            search_pipeline_completed: true,
        });

        assert!(!result.passes);
    }

    #[test]
    fn test_no_binding_authority_is_warning_not_failure() {
        let gate = HardGate::default_config();
        let citations: Vec<_> = (1..=6u64)
            .map(|i| citation(i, AuthorityLevel::Persuasive))
            .collect();
        let signals = VerificationSignals::default();
        let result = gate.validate(&GateInput {
            citations: &citations,
            signals: &signals,
            search_pipeline_completed: true,
        });

        assert!(result.passes);
        assert_eq!(result.warnings.len(), 1);
    }
}
