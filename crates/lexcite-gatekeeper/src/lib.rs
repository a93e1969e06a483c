//! Lexcite Hard Gate
//!
//! Categorical pass/fail checks over the final citation selection. This
//! stage exists because a purely numeric quality score can average away a
//! single catastrophic defect; the gate is independent of scores and
//! cannot be overridden by them.
//!
//! # Examples
//!
//! ```
//! use lexcite_gatekeeper::{GateConfig, GateInput, HardGate};
//! use lexcite_domain::VerificationSignals;
//!
//! let gate = HardGate::new(GateConfig::default());
//! let signals = VerificationSignals::default();
//! let input = GateInput {
//!     citations: &[],
//!     signals: &signals,
//!     search_pipeline_completed: true,
//! };
//! let result = gate.validate(&input);
//! // an empty selection cannot satisfy the verification-rate minimum
//! assert!(!result.passes);
//! ```

#![warn(missing_docs)]

mod config;
mod validator;

pub use config::GateConfig;
pub use validator::{GateFailure, GateInput, HardGate, HardGateResult};
