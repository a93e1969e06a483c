//! Trait definitions for external interactions
//!
//! These traits define the boundaries between pipeline logic and
//! infrastructure. Implementations live in other crates.

use std::future::Future;

use crate::candidate::OpinionHit;
use crate::event::ResearchEvent;

/// The external opinion-search service
///
/// Treated as a black box: its availability and latency are outside this
/// system's control and are the primary source of task-level failure.
/// Cancellation is the caller's concern (a per-request timeout drops the
/// returned future).
pub trait OpinionSearch {
    /// Error type for search operations
    type Error: std::fmt::Display;

    /// Search opinions matching `query` within a court scope
    ///
    /// `court_scope` is a jurisdiction scope string (see
    /// [`Jurisdiction::court_scope`](crate::Jurisdiction::court_scope));
    /// at most `max_results` hits are returned.
    fn search(
        &self,
        query: &str,
        court_scope: &str,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<OpinionHit>, Self::Error>> + Send;
}

/// Sink for structured audit events
///
/// Sinks absorb their own delivery failures; recording an event must never
/// perturb pipeline control flow.
pub trait AuditSink: Send + Sync {
    /// Record one event
    fn record(&self, event: ResearchEvent);
}

/// A sink that discards every event
///
/// Useful as a default in tests that do not assert on audit output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudit;

impl AuditSink for NullAudit {
    fn record(&self, _event: ResearchEvent) {}
}
