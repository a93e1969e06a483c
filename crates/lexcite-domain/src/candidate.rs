//! Candidate module - raw and scored hits from the opinion-search service

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::proposition::PropositionId;
use crate::tier::CourtTier;

/// External opinion document identifier
///
/// The search service's own id for an opinion. Candidates are deduplicated
/// by this value: the same opinion routinely surfaces under multiple tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OpinionId(pub u64);

impl fmt::Display for OpinionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One opinion as returned by the external search service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionHit {
    /// Opinion document id
    pub id: OpinionId,

    /// Cluster id grouping parallel opinions of the same case
    pub cluster_id: Option<u64>,

    /// Case name, e.g. "Smith v. Jones"
    pub case_name: String,

    /// Citation string, e.g. "123 So.3d 456"
    pub citation: String,

    /// Court name or code as reported by the service
    pub court: String,

    /// Filing date, when the service reported a parseable one
    pub date_filed: Option<NaiveDate>,

    /// Snippet of the opinion text matching the query
    pub snippet: String,

    /// Absolute URL of the opinion, if provided
    pub url: Option<String>,

    /// Precedential status flag from the service
    pub precedential: bool,
}

/// A hit tagged with the task context it was found under
///
/// Not unique per task; deduplication by opinion id happens in the
/// candidate pipeline, first occurrence wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCandidate {
    /// The opinion as returned by the service
    pub hit: OpinionHit,

    /// The proposition the originating task searched for
    pub proposition: PropositionId,

    /// The tier the originating task was scoped to
    pub tier: CourtTier,

    /// The query text that surfaced this hit
    pub query: String,
}

impl RawCandidate {
    /// The external opinion id, the deduplication key
    pub fn opinion_id(&self) -> OpinionId {
        self.hit.id
    }
}

/// A candidate that survived filtering, with relevance scores attached
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// The underlying candidate
    pub raw: RawCandidate,

    /// Topical-relevance score in [0, 1] against the originating proposition
    pub topical: f64,

    /// Composite relevance score in [0, 1]: keyword overlap, court
    /// authority, recency
    pub score: f64,
}

impl ScoredCandidate {
    /// The external opinion id
    pub fn opinion_id(&self) -> OpinionId {
        self.raw.opinion_id()
    }
}
