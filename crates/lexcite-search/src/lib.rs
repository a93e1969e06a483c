//! Lexcite Search Executor
//!
//! Executes planned search tasks against an external opinion-search API
//! without violating its rate limit or the caller's execution-time ceiling.
//!
//! # Architecture
//!
//! Two-level cooperative concurrency: up to `max_concurrent` requests in
//! flight inside a batch (a semaphore caps them), batches executed
//! sequentially with a mandatory delay between them. Every batch's results
//! are persisted through a [`CheckpointStore`] so a crash or timeout loses
//! at most one batch's work.
//!
//! Individual task failure (timeout, network error) is recorded and never
//! aborts the batch; only aggregate outcome handling downstream can fail a
//! run.

#![warn(missing_docs)]

mod checkpoint;
mod config;
mod error;
mod executor;
mod provider;

pub use checkpoint::{CheckpointStore, JsonCheckpoint, MemoryCheckpoint, RunCheckpoint};
pub use config::SearchConfig;
pub use error::{CheckpointError, SearchError};
pub use executor::{BatchOutcome, SearchExecutor, TaskOutcome};
pub use provider::{CourtListenerClient, MockSearch, DEFAULT_ENDPOINT};
