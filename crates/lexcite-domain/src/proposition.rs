//! Proposition module - the legal propositions a motion must support

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unique identifier for a proposition based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability (declaration order is preserved by id order
///   when ids are minted in sequence)
/// - 128-bit uniqueness with no coordination between callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropositionId(u128);

impl PropositionId {
    /// Generate a new UUIDv7-based PropositionId
    ///
    /// # Examples
    ///
    /// ```
    /// use lexcite_domain::PropositionId;
    ///
    /// let id = PropositionId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a PropositionId from a raw u128 value
    ///
    /// This is primarily for callers that mint stable test ids.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a PropositionId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid proposition id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PropositionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PropositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for PropositionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PropositionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// A legal proposition that the motion under research must support
///
/// Propositions are owned by the upstream caller and immutable for the
/// duration of one research run. The query strings are authored upstream
/// (or pre-derived by an element-extraction stage); fallback queries are
/// tried only when the authored queries return nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposition {
    /// Unique identifier
    #[serde(default)]
    pub id: PropositionId,

    /// Human-readable name/description of the proposition
    pub name: String,

    /// Whether the final selection must cover this proposition
    #[serde(default)]
    pub critical: bool,

    /// Authored search queries (the planner uses at most its per-proposition cap)
    pub queries: Vec<String>,

    /// Optional statutory anchor (e.g. a code article the proposition rests on)
    #[serde(default)]
    pub statutory_basis: Option<String>,

    /// Pre-supplied fallback queries, tried sequentially on empty results
    #[serde(default)]
    pub fallback_queries: Vec<String>,
}

impl Proposition {
    /// Create a proposition with a fresh id and no fallbacks
    pub fn new(name: impl Into<String>, critical: bool, queries: Vec<String>) -> Self {
        Self {
            id: PropositionId::new(),
            name: name.into(),
            critical,
            queries,
            statutory_basis: None,
            fallback_queries: Vec::new(),
        }
    }

    /// Attach fallback queries
    pub fn with_fallbacks(mut self, fallbacks: Vec<String>) -> Self {
        self.fallback_queries = fallbacks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposition_id_ordering() {
        let id1 = PropositionId::from_value(1000);
        let id2 = PropositionId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_proposition_id_display_and_parse() {
        let id = PropositionId::new();
        let id_str = id.to_string();

        // UUID strings are 36 characters (8-4-4-4-12 with hyphens)
        assert_eq!(id_str.len(), 36);

        let parsed = PropositionId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_proposition_id_invalid_string() {
        assert!(PropositionId::from_string("not-a-uuid").is_err());
        assert!(PropositionId::from_string("").is_err());
    }

    #[test]
    fn test_proposition_serde_roundtrip() {
        let prop = Proposition::new(
            "Discovery responses were overdue",
            true,
            vec!["motion to compel discovery responses".to_string()],
        )
        .with_fallbacks(vec!["discovery sanctions".to_string()]);

        let json = serde_json::to_string(&prop).unwrap();
        let back: Proposition = serde_json::from_str(&json).unwrap();
        assert_eq!(prop, back);
    }
}
