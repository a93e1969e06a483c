//! Structured audit events emitted at defined pipeline points
//!
//! Business logic never logs directly; the engine records these through an
//! [`AuditSink`](crate::traits::AuditSink) so rejection reasons and run
//! milestones are independently assertable in tests.

use crate::candidate::OpinionId;
use crate::run::RunId;
use crate::task::TaskId;

/// One audit event in a research run
#[derive(Debug, Clone, PartialEq)]
pub enum ResearchEvent {
    /// A run began after planning completed
    RunStarted {
        /// Run identifier
        run_id: RunId,
        /// Order/requirement the run belongs to
        order_id: String,
        /// Raw jurisdiction string
        jurisdiction: String,
        /// Number of search tasks planned
        tasks_planned: usize,
    },

    /// One search task finished (successfully or not)
    TaskCompleted {
        /// Task identifier
        task_id: TaskId,
        /// Query text
        query: String,
        /// Whether the task produced a usable result
        success: bool,
        /// Candidates returned
        hits: usize,
        /// Whether a fallback query produced the result
        used_fallback: bool,
        /// Wall-clock duration in milliseconds
        duration_ms: u64,
    },

    /// A batch's results were persisted to the checkpoint store
    BatchCheckpointed {
        /// Run identifier
        run_id: RunId,
        /// Zero-based batch index
        batch_index: usize,
        /// Tasks in the batch
        tasks: usize,
    },

    /// A candidate was rejected by the pipeline
    CandidateRejected {
        /// External opinion id
        opinion_id: OpinionId,
        /// Case name, for the audit trail
        case_name: String,
        /// Machine-readable reason code (e.g. "criminal_case")
        code: &'static str,
        /// Human-readable detail
        detail: String,
    },

    /// The hard gate blocked delivery
    GateFailed {
        /// Categorical failure descriptions
        reasons: Vec<String>,
    },

    /// The order was flagged for manual review
    FlaggedForReview {
        /// Order/requirement identifier
        order_id: String,
        /// Quality note explaining the flag
        note: String,
    },

    /// The run finished (only emitted for non-aborted runs)
    RunCompleted {
        /// Run identifier
        run_id: RunId,
        /// Order/requirement identifier
        order_id: String,
        /// Citations selected
        citations: usize,
        /// Whether the run was soft-flagged
        flagged: bool,
    },
}

impl ResearchEvent {
    /// Short event kind tag, for log field use
    pub fn kind(&self) -> &'static str {
        match self {
            ResearchEvent::RunStarted { .. } => "run_started",
            ResearchEvent::TaskCompleted { .. } => "task_completed",
            ResearchEvent::BatchCheckpointed { .. } => "batch_checkpointed",
            ResearchEvent::CandidateRejected { .. } => "candidate_rejected",
            ResearchEvent::GateFailed { .. } => "gate_failed",
            ResearchEvent::FlaggedForReview { .. } => "flagged_for_review",
            ResearchEvent::RunCompleted { .. } => "run_completed",
        }
    }
}
