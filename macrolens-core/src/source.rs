//! Snapshot retrieval and the per-session cache.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::error::{MacroLensError, Result};
use crate::snapshot::Snapshot;

/// Somewhere a snapshot can be retrieved from.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSource {
    /// Short description of the source for logs.
    fn describe(&self) -> String;
    /// Retrieve and decode the snapshot.
    fn fetch(&self) -> Result<Snapshot>;
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> Result<Snapshot> {
        (**self).fetch()
    }
}

/// Reads the snapshot document from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn fetch(&self) -> Result<Snapshot> {
        let document = std::fs::read_to_string(&self.path)?;
        Snapshot::from_json(&document)
    }
}

/// Load state of the session snapshot.
#[derive(Debug, Clone, Default)]
pub enum SnapshotState {
    /// Not retrieved yet, or the retrieval is still outstanding.
    #[default]
    Pending,
    /// Retrieved and decoded.
    Loaded(Arc<Snapshot>),
    /// Retrieval failed. The session does not retry.
    Failed(String),
}

impl SnapshotState {
    /// The snapshot, when loaded.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Loaded(snapshot) => Some(snapshot),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Whether there is no snapshot to project.
    pub fn is_absent(&self) -> bool {
        self.snapshot().is_none()
    }

    /// The snapshot, or [`MacroLensError::SnapshotAbsent`].
    pub fn require(&self) -> Result<&Snapshot> {
        self.snapshot().ok_or(MacroLensError::SnapshotAbsent)
    }
}

/// Fetches a snapshot on first demand and keeps the outcome for the session.
pub struct SnapshotCache<S> {
    source: S,
    state: OnceLock<SnapshotState>,
}

impl<S: SnapshotSource> SnapshotCache<S> {
    /// Create a cache that has not fetched anything yet.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: OnceLock::new(),
        }
    }

    /// Current state without triggering a fetch.
    ///
    /// Reports [`SnapshotState::Pending`] until a fetch has completed.
    pub fn state(&self) -> SnapshotState {
        self.state.get().cloned().unwrap_or_default()
    }

    /// Fetch the snapshot if no fetch has completed yet, then return the state.
    ///
    /// Concurrent callers wait for the single in-flight fetch. A failure is
    /// kept like a success and is never retried.
    pub fn load(&self) -> SnapshotState {
        self.state
            .get_or_init(|| {
                let description = self.source.describe();
                log::debug!("fetching snapshot from {description}");
                match self.source.fetch() {
                    Ok(snapshot) => {
                        log::debug!(
                            "snapshot from {description} loaded ({} crates)",
                            snapshot.crate_count()
                        );
                        SnapshotState::Loaded(Arc::new(snapshot))
                    }
                    Err(err) => {
                        log::warn!("snapshot from {description} unavailable: {err}");
                        SnapshotState::Failed(err.to_string())
                    }
                }
            })
            .clone()
    }
}
