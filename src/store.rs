//! Snapshot persistence.
//!
//! The store is a non-durable cache, not a transactional log: a snapshot that
//! fails to load (missing, corrupt, wrong puzzle) is simply absent, and a
//! failed save is logged and forgotten. Gameplay never blocks on storage.

use crate::game::Snapshot;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Storage errors. Callers treat these as "no snapshot", never as fatal.
#[derive(Debug, Clone, Display, Error)]
pub enum StoreError {
    /// Underlying read or write failed.
    #[display("snapshot io error: {_0}")]
    Io(#[error(not(source))] String),
    /// Stored document was not a valid snapshot.
    #[display("snapshot corrupt: {_0}")]
    Corrupt(#[error(not(source))] String),
}

/// Persists one session snapshot per puzzle.
pub trait SnapshotStore: Send + Sync {
    /// Loads the snapshot for a puzzle, `None` when absent or stale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage failed; callers
    /// recover by treating the snapshot as absent.
    fn load(&self, puzzle_id: u32) -> Result<Option<Snapshot>, StoreError>;

    /// Saves a snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write failed; a lost write is
    /// acceptable.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}

/// Store backed by a single JSON document on disk, keyed by puzzle id the
/// same way the browser client keyed its single localStorage entry.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store writing to the given path.
    #[instrument]
    pub fn new(path: PathBuf) -> Self {
        debug!(path = %path.display(), "Creating file store");
        Self { path }
    }
}

impl SnapshotStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self, puzzle_id: u32) -> Result<Option<Snapshot>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No snapshot file");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if snapshot.puzzle_id != puzzle_id {
            debug!(
                stored = snapshot.puzzle_id,
                requested = puzzle_id,
                "Snapshot is for another puzzle"
            );
            return Ok(None);
        }

        info!(guesses = snapshot.history.len(), "Snapshot loaded");
        Ok(Some(snapshot))
    }

    #[instrument(skip(self, snapshot), fields(path = %self.path.display(), puzzle_id = snapshot.puzzle_id))]
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let content =
            serde_json::to_string(snapshot).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::Io(e.to_string()))?;
        debug!(guesses = snapshot.history.len(), "Snapshot saved");
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshots: Mutex<HashMap<u32, Snapshot>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, puzzle_id: u32) -> Result<Option<Snapshot>, StoreError> {
        Ok(self
            .snapshots
            .lock()
            .expect("store mutex poisoned")
            .get(&puzzle_id)
            .cloned())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        self.snapshots
            .lock()
            .expect("store mutex poisoned")
            .insert(snapshot.puzzle_id, snapshot.clone());
        Ok(())
    }
}

/// Loads a snapshot, degrading every failure to "absent" with a warning.
#[instrument(skip(store))]
pub fn load_or_empty(store: &dyn SnapshotStore, puzzle_id: u32) -> Option<Snapshot> {
    match store.load(puzzle_id) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(error = %e, "Snapshot load failed, starting fresh");
            None
        }
    }
}
