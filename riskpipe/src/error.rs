//! Error types for riskpipe I/O and configuration

use std::path::{Path, PathBuf};

use riskpipe_core::RiskError;
use thiserror::Error;

/// Result type for riskpipe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while opening, writing or configuring exposure sources
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Risk(#[from] RiskError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Adapter for `map_err` that attaches the path being accessed
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
