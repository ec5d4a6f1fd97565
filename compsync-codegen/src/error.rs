use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for scanning and emitting.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors of a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured component directory is missing or unusable.
    #[error("invalid component directory '{path}': {reason}")]
    Configuration { path: PathBuf, reason: String },

    /// Reading a component directory or writing the declaration file failed.
    #[error("I/O error at '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn configuration(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a configuration problem rather than a filesystem failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
