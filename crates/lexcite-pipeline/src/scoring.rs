//! Relevance scoring
//!
//! Two scores per candidate:
//!
//! - a topical score against the proposition it was found for, used as a
//!   binary gate at a fixed threshold
//! - a composite score (keyword overlap, court authority, recency) used
//!   for ranking, with a low floor that drops noise

use std::collections::HashSet;

use chrono::NaiveDate;
use lexcite_domain::{Proposition, RawCandidate};

use crate::PipelineConfig;

/// Words too common to carry topical signal
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "was", "were", "are",
    "has", "have", "had", "not", "its", "his", "her", "they", "them", "must",
    "may", "shall", "upon", "into", "such", "any", "all", "can", "one", "other",
];

/// Computes topical and composite relevance scores
pub struct RelevanceScorer {
    config: PipelineConfig,
}

impl RelevanceScorer {
    /// Create a scorer with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Topical relevance of a candidate to its proposition, in [0, 1]
    ///
    /// Measures how much of the proposition's language (plus the motion
    /// type) the candidate's own text covers. A candidate about an
    /// unrelated doctrine covers little of it and falls under the gate.
    pub fn topical(&self, candidate: &RawCandidate, proposition: &Proposition, motion_type: &str) -> f64 {
        let mut target = tokenize(&proposition.name);
        target.extend(tokenize(motion_type));
        for query in &proposition.queries {
            target.extend(tokenize(query));
        }

        if target.is_empty() {
            return 0.0;
        }

        let candidate_text = candidate_tokens(candidate);
        let covered = target.iter().filter(|t| candidate_text.contains(*t)).count();
        covered as f64 / target.len() as f64
    }

    /// Composite relevance in [0, 1]: keyword overlap with the originating
    /// query, court-authority weight, and recency
    pub fn composite(&self, candidate: &RawCandidate, today: NaiveDate) -> f64 {
        let keyword = self.keyword_overlap(candidate);
        let authority = candidate.tier.authority_weight();
        let recency = self.recency(candidate.hit.date_filed, today);

        let sum = self.config.weight_sum();
        if sum <= 0.0 {
            return 0.0;
        }

        (keyword * self.config.keyword_weight
            + authority * self.config.authority_weight
            + recency * self.config.recency_weight)
            / sum
    }

    /// Fraction of the originating query's terms present in the candidate
    fn keyword_overlap(&self, candidate: &RawCandidate) -> f64 {
        let query = tokenize(&candidate.query);
        if query.is_empty() {
            return 0.0;
        }
        let text = candidate_tokens(candidate);
        let covered = query.iter().filter(|t| text.contains(*t)).count();
        covered as f64 / query.len() as f64
    }

    /// Linear decay from 1.0 (filed today) to 0.0 at the horizon
    ///
    /// Candidates without a parseable date score a neutral 0.5: age is
    /// unknown, not necessarily old.
    fn recency(&self, date_filed: Option<NaiveDate>, today: NaiveDate) -> f64 {
        let Some(date) = date_filed else {
            return 0.5;
        };
        let horizon_days = f64::from(self.config.recency_horizon_years) * 365.25;
        if horizon_days <= 0.0 {
            return 0.5;
        }
        let age_days = (today - date).num_days().max(0) as f64;
        (1.0 - age_days / horizon_days).clamp(0.0, 1.0)
    }
}

/// Lowercased, stopword-free tokens of a text
fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 2 && !STOPWORDS.contains(t))
        .map(|t| t.to_string())
        .collect()
}

/// All searchable text of a candidate as one token set
fn candidate_tokens(candidate: &RawCandidate) -> HashSet<String> {
    let mut tokens = tokenize(&candidate.hit.case_name);
    tokens.extend(tokenize(&candidate.hit.snippet));
    tokens.extend(tokenize(&candidate.hit.court));
    tokens.extend(tokenize(&candidate.hit.citation));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcite_domain::{CourtTier, OpinionHit, OpinionId, PropositionId};

    fn candidate(snippet: &str, query: &str, tier: CourtTier, date: Option<NaiveDate>) -> RawCandidate {
        RawCandidate {
            hit: OpinionHit {
                id: OpinionId(1),
                cluster_id: None,
                case_name: "Smith v. Jones".to_string(),
                citation: "123 So.2d 456".to_string(),
                court: "Louisiana Supreme Court".to_string(),
                date_filed: date,
                snippet: snippet.to_string(),
                url: None,
                precedential: true,
            },
            proposition: PropositionId::from_value(1),
            tier,
            query: query.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_topical_full_coverage() {
        let scorer = RelevanceScorer::new(PipelineConfig::default());
        let prop = Proposition::new(
            "compel discovery responses",
            true,
            vec!["compel discovery responses".to_string()],
        );
        let c = candidate(
            "on motion, the court may compel complete discovery responses from a party",
            "compel discovery responses",
            CourtTier::Tier1,
            None,
        );
        let score = scorer.topical(&c, &prop, "motion compel discovery");
        assert!(score > 0.9, "expected near-full coverage, got {}", score);
    }

    #[test]
    fn test_topical_unrelated_snippet_scores_low() {
        let scorer = RelevanceScorer::new(PipelineConfig::default());
        let prop = Proposition::new(
            "compel discovery responses",
            true,
            vec!["compel discovery responses".to_string()],
        );
        let c = candidate(
            "zoning variance appeal denied",
            "compel discovery responses",
            CourtTier::Tier1,
            None,
        );
        let score = scorer.topical(&c, &prop, "motion compel discovery");
        assert!(score < 0.3, "expected low coverage, got {}", score);
    }

    #[test]
    fn test_composite_prefers_higher_authority() {
        let scorer = RelevanceScorer::new(PipelineConfig::default());
        let date = NaiveDate::from_ymd_opt(2020, 1, 1);
        let supreme = candidate("compel discovery", "compel discovery", CourtTier::Tier1, date);
        let appellate = candidate("compel discovery", "compel discovery", CourtTier::Tier2, date);

        assert!(scorer.composite(&supreme, today()) > scorer.composite(&appellate, today()));
    }

    #[test]
    fn test_composite_prefers_recent() {
        let scorer = RelevanceScorer::new(PipelineConfig::default());
        let recent = candidate(
            "compel discovery",
            "compel discovery",
            CourtTier::Tier1,
            NaiveDate::from_ymd_opt(2023, 1, 1),
        );
        let old = candidate(
            "compel discovery",
            "compel discovery",
            CourtTier::Tier1,
            NaiveDate::from_ymd_opt(1995, 1, 1),
        );

        assert!(scorer.composite(&recent, today()) > scorer.composite(&old, today()));
    }

    #[test]
    fn test_composite_bounded() {
        let scorer = RelevanceScorer::new(PipelineConfig::default());
        let c = candidate(
            "compel discovery responses sanctions",
            "compel discovery responses sanctions",
            CourtTier::Tier1,
            Some(today()),
        );
        let score = scorer.composite(&c, today());
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_missing_date_scores_neutral_recency() {
        let scorer = RelevanceScorer::new(PipelineConfig::default());
        assert_eq!(scorer.recency(None, today()), 0.5);
    }
}
