use std::path::PathBuf;
use thiserror::Error;
use vistoria_core::VistoriaError;

/// Result alias for local store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Local store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("migration to version {version} failed: {source}")]
    Migration {
        version: i64,
        #[source]
        source: rusqlite::Error,
    },

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl From<StoreError> for VistoriaError {
    fn from(err: StoreError) -> Self {
        VistoriaError::storage(err.to_string())
    }
}
