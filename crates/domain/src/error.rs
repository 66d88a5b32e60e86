//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`InnkeepError`]
//! via `#[from]`. Absence of a record is not an error at the storage level;
//! services turn it into [`NotFoundError`].

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum InnkeepError {
    /// Client input was rejected before reaching storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons client input can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid hotel id: {0}")]
    InvalidId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
