use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(u64),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error at {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Shuffle mapping does not match catalog: {0}")]
    MappingMismatch(String),
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        GenerateError::Json {
            path: path.into(),
            source,
        }
    }
}
