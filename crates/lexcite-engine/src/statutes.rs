//! Static statutory citation table
//!
//! Statutory citations are looked up by motion type from this table,
//! never generated by the research pipeline.

use lexcite_domain::JurisdictionType;

/// Statutory citations for a motion type in a jurisdiction
///
/// Unknown motion types yield an empty list: the motion may rest purely on
/// case law, and inventing a statute would be worse than omitting one.
pub fn statutory_citations(motion_type: &str, jurisdiction: JurisdictionType) -> Vec<String> {
    let key = motion_type.trim().to_lowercase();

    let (state, federal): (&[&str], &[&str]) = match key.as_str() {
        "motion to compel" | "motion to compel discovery" => (
            &["La. Code Civ. Proc. Ann. art. 1469"],
            &["Fed. R. Civ. P. 37(a)"],
        ),
        "motion for summary judgment" => (
            &["La. Code Civ. Proc. Ann. art. 966"],
            &["Fed. R. Civ. P. 56"],
        ),
        "motion to dismiss" => (
            &["La. Code Civ. Proc. Ann. art. 927"],
            &["Fed. R. Civ. P. 12(b)(6)"],
        ),
        "motion for protective order" => (
            &["La. Code Civ. Proc. Ann. art. 1426"],
            &["Fed. R. Civ. P. 26(c)"],
        ),
        "motion in limine" => (
            &["La. Code Evid. Ann. art. 103"],
            &["Fed. R. Evid. 103"],
        ),
        _ => (&[], &[]),
    };

    let picked = match jurisdiction {
        JurisdictionType::State => state,
        JurisdictionType::Federal => federal,
    };
    picked.iter().map(|s| s.to_string()).collect()
}
