//! Jurisdiction module - STATE/FEDERAL classification and tier binding

use crate::tier::CourtTier;

/// Which side of the state/federal boundary a jurisdiction falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JurisdictionType {
    /// State courts: search tier1 (supreme) and tier2 (appellate) only
    State,

    /// Federal courts: search tier3 (circuit/district) only
    Federal,
}

impl JurisdictionType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            JurisdictionType::State => "state",
            JurisdictionType::Federal => "federal",
        }
    }
}

/// Markers that identify a court string as state-side regardless of other
/// markers. Checked first: several states style trial courts "Judicial
/// District Court" or "Judicial Circuit", which must not read as federal.
const STATE_MARKERS: &[&str] = &[
    "judicial district",
    "judicial circuit",
    "parish",
    "county",
    "superior court",
    "court of appeal",
    "state of",
];

/// Markers that identify a court string as federal-side.
const FEDERAL_MARKERS: &[&str] = &[
    "united states",
    "u.s. district",
    "u.s. court of appeals",
    "u.s. supreme court",
    "federal",
    "circuit court of appeals",
    "court of appeals for the",
    "bankruptcy",
];

/// A resolved jurisdiction context
///
/// Created once per run from the caller's raw jurisdiction string; drives
/// which court tiers are searchable for the entire run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jurisdiction {
    name: String,
    kind: JurisdictionType,
    controlling_circuit: Option<String>,
}

impl Jurisdiction {
    /// Resolve a raw jurisdiction string into a classified context
    ///
    /// State markers win over federal markers because state trial-court
    /// names frequently contain "district" or "circuit". Unrecognized
    /// strings default to STATE: a wrong FEDERAL guess would search the
    /// wrong precedent body outright, while a wrong STATE guess merely
    /// narrows it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexcite_domain::{Jurisdiction, JurisdictionType};
    ///
    /// let j = Jurisdiction::resolve("19th Judicial District Court");
    /// assert_eq!(j.kind(), JurisdictionType::State);
    ///
    /// let j = Jurisdiction::resolve("U.S. District Court, E.D. La.");
    /// assert_eq!(j.kind(), JurisdictionType::Federal);
    /// ```
    pub fn resolve(raw: &str) -> Self {
        let lowered = raw.to_lowercase();

        let kind = if STATE_MARKERS.iter().any(|m| lowered.contains(m)) {
            JurisdictionType::State
        } else if FEDERAL_MARKERS.iter().any(|m| lowered.contains(m)) {
            JurisdictionType::Federal
        } else {
            JurisdictionType::State
        };

        Self {
            name: raw.to_string(),
            kind,
            controlling_circuit: None,
        }
    }

    /// Set the controlling federal circuit (e.g. "Fifth Circuit")
    ///
    /// Used by authority classification: decisions of the controlling
    /// circuit are binding, other federal decisions are persuasive.
    pub fn with_controlling_circuit(mut self, circuit: impl Into<String>) -> Self {
        self.controlling_circuit = Some(circuit.into());
        self
    }

    /// The raw jurisdiction string as supplied by the caller
    pub fn name(&self) -> &str {
        &self.name
    }

    /// STATE or FEDERAL
    pub fn kind(&self) -> JurisdictionType {
        self.kind
    }

    /// The controlling federal circuit, if one was supplied
    pub fn controlling_circuit(&self) -> Option<&str> {
        self.controlling_circuit.as_deref()
    }

    /// The court tiers this jurisdiction is permitted to search
    ///
    /// This binding is a hard invariant: STATE never touches tier3 and
    /// FEDERAL never touches tier1/tier2.
    pub fn permitted_tiers(&self) -> &'static [CourtTier] {
        match self.kind {
            JurisdictionType::State => &[CourtTier::Tier1, CourtTier::Tier2],
            JurisdictionType::Federal => &[CourtTier::Tier3],
        }
    }

    /// Whether a tier is permitted for this jurisdiction
    pub fn is_permitted(&self, tier: CourtTier) -> bool {
        self.permitted_tiers().contains(&tier)
    }

    /// The court scope string handed to the search provider for a tier
    ///
    /// Providers map this onto their own court filter parameters.
    pub fn court_scope(&self, tier: CourtTier) -> &'static str {
        match tier {
            CourtTier::Tier1 => "state-supreme",
            CourtTier::Tier2 => "state-appellate",
            CourtTier::Tier3 => "federal-circuit federal-district",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_trial_court_resolves_state() {
        // State trial-court strings contain "district" but are not federal
        let j = Jurisdiction::resolve("19th Judicial District Court");
        assert_eq!(j.kind(), JurisdictionType::State);
        assert_eq!(j.permitted_tiers(), &[CourtTier::Tier1, CourtTier::Tier2]);
        assert!(!j.is_permitted(CourtTier::Tier3));
    }

    #[test]
    fn test_federal_district_resolves_federal() {
        let j = Jurisdiction::resolve("United States District Court for the Eastern District of Louisiana");
        assert_eq!(j.kind(), JurisdictionType::Federal);
        assert_eq!(j.permitted_tiers(), &[CourtTier::Tier3]);
        assert!(!j.is_permitted(CourtTier::Tier1));
    }

    #[test]
    fn test_state_judicial_circuit_beats_federal_markers() {
        // Florida trial courts are "Judicial Circuit" courts
        let j = Jurisdiction::resolve("Eleventh Judicial Circuit of Florida");
        assert_eq!(j.kind(), JurisdictionType::State);
    }

    #[test]
    fn test_unknown_defaults_to_state() {
        let j = Jurisdiction::resolve("Orleans Civil Tribunal");
        assert_eq!(j.kind(), JurisdictionType::State);
    }

    #[test]
    fn test_controlling_circuit() {
        let j = Jurisdiction::resolve("U.S. District Court").with_controlling_circuit("Fifth Circuit");
        assert_eq!(j.controlling_circuit(), Some("Fifth Circuit"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every permitted tier matches the resolved kind —
        /// STATE yields only tier1/tier2, FEDERAL yields only tier3.
        #[test]
        fn test_tier_binding_invariant(raw in ".{0,64}") {
            let j = Jurisdiction::resolve(&raw);
            for tier in j.permitted_tiers() {
                match j.kind() {
                    JurisdictionType::State => {
                        prop_assert!(matches!(tier, CourtTier::Tier1 | CourtTier::Tier2));
                    }
                    JurisdictionType::Federal => {
                        prop_assert!(matches!(tier, CourtTier::Tier3));
                    }
                }
            }
        }
    }
}
