//! Tier module - court-authority brackets and order service tiers

/// Court-authority bracket used to scope external search queries
///
/// - Tier1: the jurisdiction's highest state court
/// - Tier2: state intermediate appellate courts
/// - Tier3: federal circuit and district courts
///
/// STATE jurisdictions search tier1/tier2 only; FEDERAL jurisdictions
/// search tier3 only. That binding is the system's primary defense against
/// mixing state and federal precedent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtTier {
    /// State supreme court
    Tier1,

    /// State intermediate appellate courts
    Tier2,

    /// Federal circuit/district courts
    Tier3,
}

impl CourtTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtTier::Tier1 => "tier1",
            CourtTier::Tier2 => "tier2",
            CourtTier::Tier3 => "tier3",
        }
    }

    /// Parse a tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tier1" => Some(CourtTier::Tier1),
            "tier2" => Some(CourtTier::Tier2),
            "tier3" => Some(CourtTier::Tier3),
            _ => None,
        }
    }

    /// Authority weight used by composite relevance scoring
    ///
    /// A supreme-court hit outweighs an intermediate appellate hit, which
    /// outweighs a federal hit surfaced for a state-law question.
    pub fn authority_weight(&self) -> f64 {
        match self {
            CourtTier::Tier1 => 1.0,
            CourtTier::Tier2 => 0.8,
            CourtTier::Tier3 => 0.7,
        }
    }
}

impl std::str::FromStr for CourtTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid court tier: {}", s))
    }
}

/// Service tier of the order being researched
///
/// Drives the target citation count and the verification-rate minimum via
/// `TierPolicy` configuration in the engine; the pipeline itself never
/// reads pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    /// Entry tier: fewer citations, lenient verification minimum
    Standard,

    /// Mid tier
    Professional,

    /// Top/complex tier: largest citation bank, strictest verification
    Premium,
}

impl ServiceTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "standard",
            ServiceTier::Professional => "professional",
            ServiceTier::Premium => "premium",
        }
    }

    /// Parse a service tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(ServiceTier::Standard),
            "professional" => Some(ServiceTier::Professional),
            "premium" => Some(ServiceTier::Premium),
            _ => None,
        }
    }
}

impl std::str::FromStr for ServiceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid service tier: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_tier_roundtrip() {
        for tier in [CourtTier::Tier1, CourtTier::Tier2, CourtTier::Tier3] {
            assert_eq!(CourtTier::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(CourtTier::parse("tier4"), None);
    }

    #[test]
    fn test_authority_weight_ordering() {
        assert!(CourtTier::Tier1.authority_weight() > CourtTier::Tier2.authority_weight());
        assert!(CourtTier::Tier2.authority_weight() > CourtTier::Tier3.authority_weight());
    }

    #[test]
    fn test_service_tier_parse() {
        assert_eq!(ServiceTier::parse("PREMIUM"), Some(ServiceTier::Premium));
        assert_eq!(ServiceTier::parse("basic"), None);
    }
}
