//! Run checkpoint persistence
//!
//! The full task list may take longer than one execution unit allows, so
//! the executor persists accumulated batch results between unit
//! boundaries. Write-once per batch, single writer per run; the aggregate
//! stage reads the record back whole.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use lexcite_domain::RunId;
use serde::{Deserialize, Serialize};

use crate::executor::TaskOutcome;
use crate::CheckpointError;

/// Accumulated results of a run's completed batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunCheckpoint {
    /// Run identifier
    pub run_id: RunId,

    /// Number of batches whose results are recorded
    pub batches_completed: usize,

    /// Task outcomes across all completed batches, in completion order
    pub outcomes: Vec<TaskOutcome>,
}

impl RunCheckpoint {
    /// Fresh checkpoint for a run
    pub fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            batches_completed: 0,
            outcomes: Vec::new(),
        }
    }

    /// Record one completed batch
    pub fn record_batch(&mut self, outcomes: Vec<TaskOutcome>) {
        self.outcomes.extend(outcomes);
        self.batches_completed += 1;
    }
}

/// Persistence boundary for run checkpoints
pub trait CheckpointStore {
    /// Error type for store operations
    type Error: std::fmt::Display;

    /// Load the checkpoint for a run, if one exists
    fn load(&self, run_id: RunId) -> Result<Option<RunCheckpoint>, Self::Error>;

    /// Persist a run's checkpoint, replacing any previous record
    fn save(&mut self, checkpoint: &RunCheckpoint) -> Result<(), Self::Error>;
}

/// In-memory checkpoint store
///
/// Suited to tests and single-execution-unit runs where resumability is
/// not needed.
#[derive(Debug, Default)]
pub struct MemoryCheckpoint {
    runs: HashMap<RunId, RunCheckpoint>,
}

impl MemoryCheckpoint {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored checkpoint directly (test helper)
    pub fn get(&self, run_id: RunId) -> Option<RunCheckpoint> {
        self.runs.get(&run_id).cloned()
    }

    /// Insert a checkpoint directly (test helper)
    pub fn put(&mut self, checkpoint: RunCheckpoint) {
        self.runs.insert(checkpoint.run_id, checkpoint);
    }
}

impl CheckpointStore for MemoryCheckpoint {
    type Error = CheckpointError;

    fn load(&self, run_id: RunId) -> Result<Option<RunCheckpoint>, Self::Error> {
        Ok(self.runs.get(&run_id).cloned())
    }

    fn save(&mut self, checkpoint: &RunCheckpoint) -> Result<(), Self::Error> {
        self.runs.insert(checkpoint.run_id, checkpoint.clone());
        Ok(())
    }
}

/// File-backed checkpoint store, one JSON file per run
pub struct JsonCheckpoint {
    dir: PathBuf,
}

impl JsonCheckpoint {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CheckpointError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, run_id: RunId) -> PathBuf {
        self.dir.join(format!("{}.json", run_id))
    }
}

impl CheckpointStore for JsonCheckpoint {
    type Error = CheckpointError;

    fn load(&self, run_id: RunId) -> Result<Option<RunCheckpoint>, Self::Error> {
        let path = self.path_for(run_id);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&mut self, checkpoint: &RunCheckpoint) -> Result<(), Self::Error> {
        let path = self.path_for(checkpoint.run_id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(checkpoint)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcite_domain::{CourtTier, PropositionId, TaskId};

    fn outcome(query: &str) -> TaskOutcome {
        TaskOutcome {
            task_id: TaskId::new(),
            query: query.to_string(),
            proposition: PropositionId::from_value(1),
            tier: CourtTier::Tier1,
            success: true,
            candidates: Vec::new(),
            error: None,
            used_fallback: false,
            duration_ms: 12,
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryCheckpoint::new();
        let run_id = RunId::new();
        assert!(store.load(run_id).unwrap().is_none());

        let mut ckpt = RunCheckpoint::new(run_id);
        ckpt.record_batch(vec![outcome("q1"), outcome("q2")]);
        store.save(&ckpt).unwrap();

        let loaded = store.load(run_id).unwrap().unwrap();
        assert_eq!(loaded.batches_completed, 1);
        assert_eq!(loaded.outcomes.len(), 2);
    }

    #[test]
    fn test_json_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonCheckpoint::new(dir.path()).unwrap();
        let run_id = RunId::new();

        let mut ckpt = RunCheckpoint::new(run_id);
        ckpt.record_batch(vec![outcome("q1")]);
        store.save(&ckpt).unwrap();

        // A second batch overwrites the file with the grown record
        ckpt.record_batch(vec![outcome("q2")]);
        store.save(&ckpt).unwrap();

        let loaded = store.load(run_id).unwrap().unwrap();
        assert_eq!(loaded, ckpt);
        assert_eq!(loaded.batches_completed, 2);
    }

    #[test]
    fn test_json_store_missing_run_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCheckpoint::new(dir.path()).unwrap();
        assert!(store.load(RunId::new()).unwrap().is_none());
    }
}
