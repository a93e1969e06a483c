//! Lexcite Outcome Reporter
//!
//! Maps citation-count outcomes to success / flagged-for-review /
//! hard-failure, writes structured quality notes, and aggregates the
//! diagnostic counts used for audit and verification-proof purposes.
//!
//! Also home of the [`AuditSink`](lexcite_domain::traits::AuditSink)
//! implementations: `TracingAudit` for live runs, `MemoryAudit` for tests.

#![warn(missing_docs)]

mod audit;
mod outcome;

pub use audit::{MemoryAudit, TracingAudit};
pub use outcome::{CitationCounts, OutcomeClass, OutcomePolicy, OutcomeReport, OutcomeReporter};
