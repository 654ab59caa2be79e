use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    ConnectionError(#[from] PoolError),
    /// The query failed to execute.
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    /// A stored row violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
