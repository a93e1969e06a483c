//! Core engine implementation

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use lexcite_domain::traits::{AuditSink, OpinionSearch};
use lexcite_domain::{Jurisdiction, ResearchEvent, RunId};
use lexcite_gatekeeper::{GateConfig, GateInput, HardGate};
use lexcite_pipeline::CandidatePipeline;
use lexcite_planner::QueryPlanner;
use lexcite_report::{OutcomeClass, OutcomeReporter};
use lexcite_search::{CheckpointStore, SearchExecutor};
use lexcite_selector::{SelectionConfig, Selector};
use tracing::{info, warn};

use crate::statutes::statutory_citations;
use crate::types::{ResearchOutcome, ResearchRequest, VerificationProof};
use crate::{EngineConfig, EngineError};

/// Orchestrates one citation-research run end to end
pub struct ResearchEngine<S, C, A> {
    executor: SearchExecutor<S>,
    checkpoint: C,
    audit: A,
    config: EngineConfig,
}

impl<S, C, A> ResearchEngine<S, C, A>
where
    S: OpinionSearch + Send + Sync + 'static,
    C: CheckpointStore,
    A: AuditSink,
{
    /// Create an engine around a search provider, checkpoint store, and
    /// audit sink
    pub fn new(provider: S, checkpoint: C, audit: A, config: EngineConfig) -> Self {
        let executor = SearchExecutor::new(provider, config.search.clone());
        Self {
            executor,
            checkpoint,
            audit,
            config,
        }
    }

    /// The audit sink, for callers that inspect captured events
    pub fn audit(&self) -> &A {
        &self.audit
    }

    /// Execute one research run
    ///
    /// Transient task failures and quality rejections are absorbed along
    /// the way; only coverage and hard-gate failures return an error. Both
    /// flag the requirement for manual handling before propagating.
    pub async fn run(&mut self, request: &ResearchRequest) -> Result<ResearchOutcome, EngineError> {
        let run_id = request.run_id.unwrap_or_else(RunId::new);

        let mut jurisdiction = Jurisdiction::resolve(&request.jurisdiction);
        if let Some(circuit) = &request.controlling_circuit {
            jurisdiction = jurisdiction.with_controlling_circuit(circuit.clone());
        }

        let planner = QueryPlanner::new(self.config.planner.clone());
        let plan = planner.plan(&request.propositions, &jurisdiction);

        self.audit.record(ResearchEvent::RunStarted {
            run_id,
            order_id: request.order_id.clone(),
            jurisdiction: request.jurisdiction.clone(),
            tasks_planned: plan.len(),
        });

        info!(
            run_id = %run_id,
            order_id = request.order_id.as_str(),
            jurisdiction = jurisdiction.name(),
            kind = jurisdiction.kind().as_str(),
            tasks = plan.len(),
            "starting citation research run"
        );

        // Search, checkpointed per batch
        let outcomes = self
            .executor
            .run(run_id, &plan, &jurisdiction, &mut self.checkpoint, &self.audit)
            .await
            .map_err(|e| EngineError::Checkpoint(e.to_string()))?;

        let searches_attempted = outcomes.len();
        let searches_succeeded = outcomes.iter().filter(|o| o.success).count();

        // Aggregate raw candidates (order-independent union)
        let raw: Vec<_> = outcomes.into_iter().flat_map(|o| o.candidates).collect();
        let candidates_found = raw.len();

        // Filter and score
        let pipeline = CandidatePipeline::new(self.config.pipeline.clone());
        let today = Utc::now().date_naive();
        let output = pipeline.process(
            raw,
            &request.propositions,
            &jurisdiction,
            &request.motion_type,
            today,
        );

        for rejection in &output.rejections {
            self.audit.record(ResearchEvent::CandidateRejected {
                opinion_id: rejection.opinion_id,
                case_name: rejection.case_name.clone(),
                code: rejection.reason.code(),
                detail: rejection.reason.to_string(),
            });
        }

        // Select per tier policy
        let policy = self.config.policy(request.service_tier);
        let verified_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let selector = Selector::new(SelectionConfig::with_target(policy.target_citations));
        let citations = selector.select(&output, &request.propositions, &jurisdiction, verified_at);

        // Coverage: the only scarcity condition that aborts
        let reporter = OutcomeReporter::new(self.config.outcome.clone());
        let report = reporter.report(&citations, searches_attempted, searches_succeeded);

        if report.class == OutcomeClass::HardFailure {
            let note = report
                .quality_notes
                .first()
                .cloned()
                .unwrap_or_else(|| "insufficient citations".to_string());
            warn!(run_id = %run_id, citations = citations.len(), "coverage failure");
            self.audit.record(ResearchEvent::FlaggedForReview {
                order_id: request.order_id.clone(),
                note,
            });
            return Err(EngineError::CoverageFailure {
                found: citations.len(),
                minimum: reporter.policy().hard_stop_minimum,
            });
        }

        // Hard gate: categorical, cannot be overridden by scores. The
        // sentinel is set here because every batch above ran to completion.
        let gate = HardGate::new(GateConfig::with_rate_minimum(policy.verification_rate_minimum));
        let gate_result = gate.validate(&GateInput {
            citations: &citations,
            signals: &request.signals,
            search_pipeline_completed: true,
        });

        if !gate_result.passes {
            let reasons = gate_result.failure_strings();
            warn!(run_id = %run_id, reasons = ?reasons, "hard gate failure");
            self.audit.record(ResearchEvent::GateFailed {
                reasons: reasons.clone(),
            });
            self.audit.record(ResearchEvent::FlaggedForReview {
                order_id: request.order_id.clone(),
                note: format!("hard gate failed: {}", reasons.join("; ")),
            });
            return Err(EngineError::GateFailure { reasons });
        }

        if report.flagged_for_review {
            self.audit.record(ResearchEvent::FlaggedForReview {
                order_id: request.order_id.clone(),
                note: report
                    .quality_notes
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "below ideal citation count".to_string()),
            });
        }

        let elements_covered = request
            .propositions
            .iter()
            .filter(|p| citations.iter().any(|c| c.proposition == p.id))
            .count();

        self.audit.record(ResearchEvent::RunCompleted {
            run_id,
            order_id: request.order_id.clone(),
            citations: citations.len(),
            flagged: report.flagged_for_review,
        });

        info!(
            run_id = %run_id,
            citations = citations.len(),
            binding = report.counts.binding,
            persuasive = report.counts.persuasive,
            flagged = report.flagged_for_review,
            "citation research run complete"
        );

        Ok(ResearchOutcome {
            success: true,
            run_id,
            statutory_citations: statutory_citations(&request.motion_type, jurisdiction.kind()),
            counts: report.counts.clone(),
            class: report.class,
            flagged_for_review: report.flagged_for_review,
            quality_notes: report.quality_notes.clone(),
            elements_covered,
            total_elements: request.propositions.len(),
            verification_proof: VerificationProof {
                searches_attempted,
                searches_succeeded,
                candidates_found,
                candidates_rejected: output.rejections.len(),
                citations_selected: citations.len(),
                gate_passed: gate_result.passes,
                gate_warnings: gate_result.warnings,
            },
            citations,
        })
    }
}
