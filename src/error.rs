use mongodb::error::ErrorKind;
use thiserror::Error;

/// Errors surfaced while reloading a collection.
///
/// Only connectivity failures are given a dedicated variant (with operator
/// guidance in the message); every other driver failure passes through.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(
        "could not connect to a running MongoDB database - please ensure that the database is running"
    )]
    Connectivity(#[source] mongodb::error::Error),
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl StoreError {
    /// Classify a driver error, translating server-selection timeouts into
    /// [`StoreError::Connectivity`].
    pub(crate) fn from_driver(err: mongodb::error::Error) -> Self {
        if matches!(*err.kind, ErrorKind::ServerSelection { .. }) {
            StoreError::Connectivity(err)
        } else {
            StoreError::Database(err)
        }
    }
}
