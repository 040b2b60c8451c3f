use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to create '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Attaches the destination path to a writer failure.
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::Io { source } => Error::Write {
                path: path.into(),
                source,
            },
            other => other,
        }
    }

    /// Path of the file involved, when known.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Io { .. } => None,
            Error::Create { path, .. } | Error::Write { path, .. } => Some(path),
        }
    }
}
