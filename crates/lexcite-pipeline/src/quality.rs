//! Quality validation predicates
//!
//! Pure predicates over {case name, citation, date filed}. A failure here
//! is a deliberate rejection with a reason code, not an error.

use chrono::NaiveDate;
use lexcite_domain::{JurisdictionType, OpinionHit};
use regex::Regex;

use crate::rejection::RejectionReason;

/// Validates candidate quality before any scoring work is spent on them
pub struct QualityValidator {
    criminal: Regex,
    bare_numeric: Regex,
    state_reporter: Regex,
    state_docket: Regex,
    federal_reporter: Regex,
}

impl QualityValidator {
    /// Compile the validator's patterns
    pub fn new() -> Self {
        // "State v. …", "State of Louisiana v. …", "People v. …",
        // "Commonwealth v. …", "United States v. …", "U.S. v. …",
        // including relator style ("State ex rel. … v. …")
        let criminal = Regex::new(
            r"(?i)^\s*(?:state|people|commonwealth|united states|u\.s\.)(?:\s+of\s+[a-z.\s]+?)?(?:\s+ex\s+rel\.?\s+.+?)?\s+v\.?\s",
        )
        .unwrap();

        // A bare row id leaking through from the search database
        let bare_numeric = Regex::new(r"^\d+$").unwrap();

        let state_reporter = Regex::new(
            r"\b\d+\s+(?:So\.(?:\s?[23]d)?|P\.(?:[23]d)?|N\.E\.(?:[23]d)?|N\.W\.(?:2d)?|S\.E\.(?:2d)?|S\.W\.(?:[23]d)?|A\.(?:[23]d)?|Cal\.\s?Rptr\.(?:\s?[23]d)?|N\.Y\.S\.(?:2d|3d)?)\s+\d+",
        )
        .unwrap();

        // Public-domain/docket formats, e.g. "2019-0456 (La. 5/8/19)" or
        // "2018-CA-1123"
        let state_docket = Regex::new(r"^\d{4}-(?:[A-Z]{1,4}-)?\d+").unwrap();

        let federal_reporter = Regex::new(
            r"\b\d+\s+(?:F\.(?:2d|3d|4th)?|F\.\s?Supp\.(?:\s?[23]d)?|U\.S\.|S\.\s?Ct\.|L\.\s?Ed\.(?:\s?2d)?)\s+\d+",
        )
        .unwrap();

        Self {
            criminal,
            bare_numeric,
            state_reporter,
            state_docket,
            federal_reporter,
        }
    }

    /// Validate one candidate; `None` means it passed
    ///
    /// `today` is injected so future-date detection is deterministic under
    /// test.
    pub fn validate(
        &self,
        hit: &OpinionHit,
        expected: JurisdictionType,
        today: NaiveDate,
    ) -> Option<RejectionReason> {
        if self.criminal.is_match(&hit.case_name) {
            return Some(RejectionReason::CriminalCase);
        }

        if let Some(date) = hit.date_filed {
            if date > today {
                return Some(RejectionReason::FutureDated { date });
            }
        }

        if !self.valid_citation(&hit.citation, expected) {
            return Some(RejectionReason::InvalidCitationFormat {
                citation: hit.citation.clone(),
            });
        }

        None
    }

    /// Whether a citation string is a recognized format for the expected side
    fn valid_citation(&self, citation: &str, expected: JurisdictionType) -> bool {
        let trimmed = citation.trim();
        if trimmed.is_empty() || self.bare_numeric.is_match(trimmed) {
            return false;
        }

        match expected {
            JurisdictionType::State => {
                self.state_reporter.is_match(trimmed) || self.state_docket.is_match(trimmed)
            }
            JurisdictionType::Federal => {
                self.federal_reporter.is_match(trimmed) || self.state_docket.is_match(trimmed)
            }
        }
    }
}

impl Default for QualityValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcite_domain::OpinionId;

    fn hit(case_name: &str, citation: &str, date_filed: Option<NaiveDate>) -> OpinionHit {
        OpinionHit {
            id: OpinionId(1),
            cluster_id: None,
            case_name: case_name.to_string(),
            citation: citation.to_string(),
            court: "Louisiana Supreme Court".to_string(),
            date_filed,
            snippet: String::new(),
            url: None,
            precedential: true,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_criminal_state_prefix_rejected() {
        let v = QualityValidator::new();
        let h = hit("State v. Doe", "123 So.2d 456", None);
        assert_eq!(
            v.validate(&h, JurisdictionType::State, today()),
            Some(RejectionReason::CriminalCase)
        );
    }

    #[test]
    fn test_criminal_variants_rejected() {
        let v = QualityValidator::new();
        for name in [
            "State of Louisiana v. Smith",
            "People v. Gonzales",
            "Commonwealth v. Keller",
            "United States v. Booker",
            "U.S. v. Jones",
            "State ex rel. Olivieri v. State",
        ] {
            let h = hit(name, "123 So.2d 456", None);
            assert_eq!(
                v.validate(&h, JurisdictionType::State, today()),
                Some(RejectionReason::CriminalCase),
                "{} should be criminal",
                name
            );
        }
    }

    #[test]
    fn test_civil_case_with_state_party_name_passes() {
        let v = QualityValidator::new();
        // "State" only as part of a longer civil caption does not match
        let h = hit("Statewide Builders v. Acme", "123 So.2d 456", None);
        assert_eq!(v.validate(&h, JurisdictionType::State, today()), None);
    }

    #[test]
    fn test_future_date_rejected() {
        let v = QualityValidator::new();
        let future = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();
        let h = hit("Smith v. Jones", "123 So.2d 456", Some(future));
        assert_eq!(
            v.validate(&h, JurisdictionType::State, today()),
            Some(RejectionReason::FutureDated { date: future })
        );
    }

    #[test]
    fn test_missing_date_is_not_future() {
        let v = QualityValidator::new();
        let h = hit("Smith v. Jones", "123 So.2d 456", None);
        assert_eq!(v.validate(&h, JurisdictionType::State, today()), None);
    }

    #[test]
    fn test_bare_numeric_citation_rejected() {
        let v = QualityValidator::new();
        let h = hit("Smith v. Jones", "11046003", None);
        assert_eq!(
            v.validate(&h, JurisdictionType::State, today()),
            Some(RejectionReason::InvalidCitationFormat { citation: "11046003".to_string() })
        );
    }

    #[test]
    fn test_empty_citation_rejected() {
        let v = QualityValidator::new();
        let h = hit("Smith v. Jones", "  ", None);
        assert!(matches!(
            v.validate(&h, JurisdictionType::State, today()),
            Some(RejectionReason::InvalidCitationFormat { .. })
        ));
    }

    #[test]
    fn test_state_docket_format_accepted() {
        let v = QualityValidator::new();
        for citation in ["2019-0456 (La. 5/8/19)", "2018-CA-1123"] {
            let h = hit("Smith v. Jones", citation, None);
            assert_eq!(
                v.validate(&h, JurisdictionType::State, today()),
                None,
                "{} should be valid",
                citation
            );
        }
    }

    #[test]
    fn test_federal_reporter_accepted_federal_side() {
        let v = QualityValidator::new();
        let h = hit("Smith v. Jones", "550 F.3d 612", None);
        assert_eq!(v.validate(&h, JurisdictionType::Federal, today()), None);
    }

    #[test]
    fn test_unrecognized_state_citation_rejected() {
        let v = QualityValidator::new();
        let h = hit("Smith v. Jones", "WL 4483442", None);
        assert!(matches!(
            v.validate(&h, JurisdictionType::State, today()),
            Some(RejectionReason::InvalidCitationFormat { .. })
        ));
    }
}
