use thiserror::Error;

/// Caller-facing rejections of a catalog request.
///
/// The messages are returned verbatim to HTTP clients.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogValidationError {
    #[error("Invalid productCategory value")]
    InvalidCategory,
    #[error("Invalid productDescription value")]
    InvalidDescription,
    #[error("Invalid pageSize value")]
    InvalidPageSize,
    #[error("Invalid pageNumber value")]
    InvalidPageNumber,
}

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request was understood but rejected.
    #[error(transparent)]
    Validation(#[from] CatalogValidationError),
    /// Query parameters could not be turned into a request.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
