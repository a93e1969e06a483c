//! Terminal error taxonomy for a research run
//!
//! Task-level failures and quality rejections are absorbed inside the
//! pipeline; only coverage and categorical (hard-gate) failures abort a
//! run, and each maps to its own variant here.

use thiserror::Error;

/// Errors that terminate a research run
#[derive(Error, Debug)]
pub enum EngineError {
    /// Citation count below the hard-stop minimum (including zero);
    /// scarcity, not correctness
    #[error("Citation count {found} below hard-stop minimum {minimum}; requirement flagged for manual research")]
    CoverageFailure {
        /// Citations found
        found: usize,
        /// Hard-stop minimum in effect
        minimum: usize,
    },

    /// Categorical hard-gate failure; correctness, not scarcity
    #[error("Hard gate failed: {}", reasons.join("; "))]
    GateFailure {
        /// Categorical failure descriptions
        reasons: Vec<String>,
    },

    /// Checkpoint store failure between execution units
    #[error("Checkpoint error: {0}")]
    Checkpoint(String),
}
