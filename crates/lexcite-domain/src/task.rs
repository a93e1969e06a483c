//! Search task module - one jurisdiction-tier-tagged query

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::proposition::PropositionId;
use crate::tier::CourtTier;

/// Unique identifier for a search task, UUIDv7-backed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u128);

impl TaskId {
    /// Generate a new UUIDv7-based TaskId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a TaskId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a TaskId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid task id: {}", e))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// One planned search against the external opinion service
///
/// Created by the planner, consumed exactly once by the executor, never
/// persisted beyond one run. The tier is fixed at planning time and is
/// guaranteed to belong to the jurisdiction's permitted tier set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTask {
    /// Unique task identifier
    pub id: TaskId,

    /// Query text sent to the search provider
    pub query: String,

    /// The proposition this task searches support for
    pub proposition: PropositionId,

    /// Court tier the search is scoped to
    pub tier: CourtTier,

    /// Fallback queries tried sequentially when the primary query is empty
    pub fallback_queries: Vec<String>,
}

impl SearchTask {
    /// Create a task with a fresh id
    pub fn new(
        query: impl Into<String>,
        proposition: PropositionId,
        tier: CourtTier,
        fallback_queries: Vec<String>,
    ) -> Self {
        Self {
            id: TaskId::new(),
            query: query.into(),
            proposition,
            tier,
            fallback_queries,
        }
    }
}
