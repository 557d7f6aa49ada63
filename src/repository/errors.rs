use thiserror::Error;

/// Errors surfaced by the slot persistence boundary.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A pooled connection could not be checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The underlying database query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A slot payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Input failed a domain constraint before reaching the database.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
