use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[cfg(feature = "glob")]
    #[error("Invalid dataset pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

impl DatasetError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => DatasetError::NotFound { path },
            _ => DatasetError::Io { path, source },
        }
    }

    /// The dataset file the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DatasetError::NotFound { path } | DatasetError::Io { path, .. } => Some(path.as_path()),
            #[cfg(feature = "glob")]
            DatasetError::Glob(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DatasetError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
