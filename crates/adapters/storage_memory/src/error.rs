//! Errors originating from the in-memory store.

use innkeep_domain::error::InnkeepError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The id counter cannot advance any further.
    #[error("hotel id space exhausted")]
    IdsExhausted,
}

impl From<StorageError> for InnkeepError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
