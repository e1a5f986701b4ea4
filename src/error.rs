//! The errors a store can report

use std::path::PathBuf;

use thiserror::Error;

use crate::task::TaskId;

/// What went wrong during a store operation.
///
/// Only `Init` is fatal: a process that cannot open its store has nothing to
/// run on, and should exit with the diagnostic. The other variants are
/// per-operation results the caller decides how to surface.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but could not be opened or parsed
    #[error("Unable to initialize store from {path:?}: {source}")]
    Init {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An update or deletion referenced an id that is not in the collection.
    /// Nothing was mutated.
    #[error("No task with id {0}")]
    NotFound(TaskId),

    /// The backing file rejected a write. The in-memory collection was rolled
    /// back to its previous contents, so memory and disk still agree.
    #[error("Unable to save backing file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::NotFound(_) => true,
            _ => false,
        }
    }
}
