//! Audit sink implementations

use std::sync::Mutex;

use lexcite_domain::traits::AuditSink;
use lexcite_domain::ResearchEvent;
use tracing::{info, warn};

/// Audit sink that forwards events to `tracing`
///
/// The pipeline's business logic stays free of I/O concerns; this sink is
/// where run telemetry becomes log output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn record(&self, event: ResearchEvent) {
        match &event {
            ResearchEvent::GateFailed { reasons } => {
                warn!(kind = event.kind(), reasons = ?reasons, "audit event");
            }
            ResearchEvent::FlaggedForReview { order_id, note } => {
                warn!(kind = event.kind(), order_id = order_id.as_str(), note = note.as_str(), "audit event");
            }
            ResearchEvent::CandidateRejected { opinion_id, code, detail, .. } => {
                info!(kind = event.kind(), opinion = %opinion_id, code, detail = detail.as_str(), "audit event");
            }
            other => {
                info!(kind = other.kind(), event = ?other, "audit event");
            }
        }
    }
}

/// Audit sink that captures events in memory
///
/// Deterministic test double: assertions run against the captured event
/// list.
///
/// # Examples
///
/// ```
/// use lexcite_domain::traits::AuditSink;
/// use lexcite_domain::ResearchEvent;
/// use lexcite_report::MemoryAudit;
///
/// let audit = MemoryAudit::new();
/// audit.record(ResearchEvent::GateFailed { reasons: vec!["bad".to_string()] });
/// assert_eq!(audit.events().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryAudit {
    events: Mutex<Vec<ResearchEvent>>,
}

impl MemoryAudit {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, in order
    pub fn events(&self) -> Vec<ResearchEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events of one kind
    pub fn events_of(&self, kind: &str) -> Vec<ResearchEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.kind() == kind)
            .collect()
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, event: ResearchEvent) {
        self.events.lock().unwrap().push(event);
    }
}
