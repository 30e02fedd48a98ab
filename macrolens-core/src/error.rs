//! Error types for MacroLens core.

use std::{error::Error, fmt, io};

/// Error type for MacroLens core operations.
#[derive(Debug)]
pub enum MacroLensError {
    /// A category mapping had no entries to total.
    EmptyMapping,
    /// The snapshot has not been loaded, or loading it failed.
    SnapshotAbsent,
    /// Retrieving the snapshot failed before a document was received.
    Fetch(String),
    /// The snapshot document did not match the expected schema.
    Decode(serde_json::Error),
    /// An underlying I/O error.
    Io(io::Error),
    /// A chart name that does not match any dashboard chart.
    UnknownChart(String),
}

impl fmt::Display for MacroLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMapping => write!(f, "cannot total an empty mapping"),
            Self::SnapshotAbsent => write!(f, "snapshot is not available"),
            Self::Fetch(message) => write!(f, "fetch failed: {message}"),
            Self::Decode(err) => write!(f, "invalid snapshot: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::UnknownChart(name) => write!(f, "unknown chart: {name}"),
        }
    }
}

impl Error for MacroLensError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MacroLensError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for MacroLensError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Convenience result type for MacroLens core.
pub type Result<T> = std::result::Result<T, MacroLensError>;
