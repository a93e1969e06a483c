//! Batched, rate-limited search execution

use std::sync::Arc;
use std::time::Instant;

use lexcite_domain::traits::{AuditSink, OpinionSearch};
use lexcite_domain::{
    CourtTier, Jurisdiction, PropositionId, RawCandidate, ResearchEvent, RunId, SearchTask, TaskId,
};
use lexcite_planner::TaskPlan;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::checkpoint::{CheckpointStore, RunCheckpoint};
use crate::SearchConfig;

/// Outcome of one search task
///
/// An empty candidate list with `success = true` means the queries ran and
/// found nothing; `success = false` means the request itself failed or
/// timed out. Neither is fatal to the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    /// Task identifier
    pub task_id: TaskId,

    /// Primary query text
    pub query: String,

    /// Proposition the task searched for
    pub proposition: PropositionId,

    /// Tier the task was scoped to
    pub tier: CourtTier,

    /// Whether the search ran without error
    pub success: bool,

    /// Candidates found (possibly empty)
    pub candidates: Vec<RawCandidate>,

    /// Error description when `success` is false
    pub error: Option<String>,

    /// Whether a fallback query produced the candidates
    pub used_fallback: bool,

    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// Aggregate outcome of one batch
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Zero-based batch index
    pub batch_index: usize,

    /// Per-task outcomes, in task order
    pub outcomes: Vec<TaskOutcome>,

    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl BatchOutcome {
    /// Tasks that ran without error
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// Tasks that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Total candidates found across the batch
    pub fn candidates_found(&self) -> usize {
        self.outcomes.iter().map(|o| o.candidates.len()).sum()
    }
}

/// Executes search tasks in checkpointed batches under a concurrency cap
pub struct SearchExecutor<S> {
    provider: Arc<S>,
    config: SearchConfig,
    semaphore: Arc<Semaphore>,
}

impl<S> SearchExecutor<S>
where
    S: OpinionSearch + Send + Sync + 'static,
{
    /// Create an executor around a provider
    pub fn new(provider: S, config: SearchConfig) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent.max(1)));
        Self {
            provider: Arc::new(provider),
            config,
            semaphore,
        }
    }

    /// The provider, shared
    pub fn provider(&self) -> &Arc<S> {
        &self.provider
    }

    /// Execute the whole plan, checkpointing after every batch
    ///
    /// Batches already present in the checkpoint are skipped, so a rerun
    /// after a crash or timeout resumes where the previous execution unit
    /// stopped. Task failures are recorded, never propagated.
    pub async fn run<C, A>(
        &self,
        run_id: RunId,
        plan: &TaskPlan,
        jurisdiction: &Jurisdiction,
        checkpoint: &mut C,
        audit: &A,
    ) -> Result<Vec<TaskOutcome>, C::Error>
    where
        C: CheckpointStore,
        A: AuditSink,
    {
        let mut state = checkpoint
            .load(run_id)?
            .unwrap_or_else(|| RunCheckpoint::new(run_id));

        let resume_from = state.batches_completed;
        if resume_from > 0 {
            info!(run_id = %run_id, completed = resume_from, "resuming from checkpoint");
        }

        let batch_size = self.config.batch_size.max(1);
        let batches: Vec<&[SearchTask]> = plan.tasks.chunks(batch_size).collect();

        for (index, batch) in batches.iter().enumerate() {
            if index < resume_from {
                continue;
            }
            // pacing applies between live batches, not after checkpoint skips
            if index > resume_from {
                sleep(self.config.inter_batch_delay()).await;
            }

            let outcome = self.execute_batch(index, batch, jurisdiction).await;

            for task_outcome in &outcome.outcomes {
                audit.record(ResearchEvent::TaskCompleted {
                    task_id: task_outcome.task_id,
                    query: task_outcome.query.clone(),
                    success: task_outcome.success,
                    hits: task_outcome.candidates.len(),
                    used_fallback: task_outcome.used_fallback,
                    duration_ms: task_outcome.duration_ms,
                });
            }

            state.record_batch(outcome.outcomes);
            checkpoint.save(&state)?;
            audit.record(ResearchEvent::BatchCheckpointed {
                run_id,
                batch_index: index,
                tasks: batch.len(),
            });
        }

        Ok(state.outcomes)
    }

    /// Execute one batch with bounded concurrency
    pub async fn execute_batch(
        &self,
        batch_index: usize,
        tasks: &[SearchTask],
        jurisdiction: &Jurisdiction,
    ) -> BatchOutcome {
        let started = Instant::now();
        let mut handles = Vec::with_capacity(tasks.len());

        for (i, task) in tasks.iter().enumerate() {
            if i > 0 && !self.config.inter_request_delay().is_zero() {
                sleep(self.config.inter_request_delay()).await;
            }

            let provider = Arc::clone(&self.provider);
            let semaphore = Arc::clone(&self.semaphore);
            let config = self.config.clone();
            let scope = jurisdiction.court_scope(task.tier).to_string();
            let task = task.clone();

            handles.push(tokio::spawn(async move {
                // acquire_owned only errs after close, which never happens here
                let _permit = semaphore.acquire_owned().await;
                execute_task(provider.as_ref(), &task, &scope, &config).await
            }));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (i, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    warn!(batch = batch_index, task = i, error = %e, "search task panicked");
                    let task = &tasks[i];
                    outcomes.push(TaskOutcome {
                        task_id: task.id,
                        query: task.query.clone(),
                        proposition: task.proposition,
                        tier: task.tier,
                        success: false,
                        candidates: Vec::new(),
                        error: Some(format!("task join error: {}", e)),
                        used_fallback: false,
                        duration_ms: 0,
                    });
                }
            }
        }

        let batch = BatchOutcome {
            batch_index,
            outcomes,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        debug!(
            batch = batch_index,
            succeeded = batch.succeeded(),
            failed = batch.failed(),
            candidates = batch.candidates_found(),
            duration_ms = batch.duration_ms,
            "batch complete"
        );

        batch
    }
}

/// Run one task: primary query, then fallbacks sequentially on empty
async fn execute_task<S: OpinionSearch>(
    provider: &S,
    task: &SearchTask,
    scope: &str,
    config: &SearchConfig,
) -> TaskOutcome {
    let started = Instant::now();

    let outcome = |success, candidates, error, used_fallback| TaskOutcome {
        task_id: task.id,
        query: task.query.clone(),
        proposition: task.proposition,
        tier: task.tier,
        success,
        candidates,
        error,
        used_fallback,
        duration_ms: started.elapsed().as_millis() as u64,
    };

    match timed_search(provider, &task.query, scope, config).await {
        Ok(hits) if !hits.is_empty() => {
            let candidates = wrap_hits(hits, task, &task.query);
            outcome(true, candidates, None, false)
        }
        Ok(_) => {
            // Fallbacks are a courtesy retry, tried one at a time
            for fallback in &task.fallback_queries {
                match timed_search(provider, fallback, scope, config).await {
                    Ok(hits) if !hits.is_empty() => {
                        let candidates = wrap_hits(hits, task, fallback);
                        return outcome(true, candidates, None, true);
                    }
                    Ok(_) => continue,
                    Err(e) => {
                        debug!(query = fallback.as_str(), error = %e, "fallback query failed");
                        continue;
                    }
                }
            }
            outcome(true, Vec::new(), None, false)
        }
        Err(e) => outcome(false, Vec::new(), Some(e), false),
    }
}

/// Search with the executor's per-request timeout applied
async fn timed_search<S: OpinionSearch>(
    provider: &S,
    query: &str,
    scope: &str,
    config: &SearchConfig,
) -> Result<Vec<lexcite_domain::OpinionHit>, String> {
    match timeout(
        config.request_timeout(),
        provider.search(query, scope, config.max_results_per_query),
    )
    .await
    {
        Ok(Ok(hits)) => Ok(hits),
        Ok(Err(e)) => Err(format!("search failed: {}", e)),
        Err(_) => Err(format!("timed out after {:?}", config.request_timeout())),
    }
}

fn wrap_hits(
    hits: Vec<lexcite_domain::OpinionHit>,
    task: &SearchTask,
    query: &str,
) -> Vec<RawCandidate> {
    hits.into_iter()
        .map(|hit| RawCandidate {
            hit,
            proposition: task.proposition,
            tier: task.tier,
            query: query.to_string(),
        })
        .collect()
}
