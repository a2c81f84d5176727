//! Error types for sampling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for sampling operations
pub type Result<T> = std::result::Result<T, SampleError>;

/// Errors that can occur while reading a metrics interface
#[derive(Debug, Error)]
pub enum SampleError {
    /// Interface file missing or unreadable
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Interface content present but not a usable number
    #[error("invalid value in {}: {content:?}", path.display())]
    Parse { path: PathBuf, content: String },
}

impl SampleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            content: content.into(),
        }
    }
}
