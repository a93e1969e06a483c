//! Lexcite Candidate Pipeline
//!
//! Narrows raw search hits into a ranked, quality-clean candidate list:
//!
//! 1. Deduplication by external opinion id (first occurrence wins)
//! 2. Jurisdiction filter (court-name and citation-format signals)
//! 3. Quality validation (criminal cases, future dates, malformed citations)
//! 4. Topical-relevance gate (binary, fixed threshold)
//! 5. Composite relevance scoring and ranking
//!
//! Stage order matters: later stages are more expensive, and every stage
//! strictly narrows or reshapes the set. Rejections are data, not errors —
//! each carries a machine-readable reason code for the audit trail.

#![warn(missing_docs)]

mod config;
mod filter;
mod pipeline;
mod quality;
mod rejection;
mod scoring;

pub use config::PipelineConfig;
pub use filter::{JurisdictionFilter, MismatchSignal};
pub use pipeline::{CandidatePipeline, PipelineOutput};
pub use quality::QualityValidator;
pub use rejection::{Rejection, RejectionReason};
pub use scoring::RelevanceScorer;
