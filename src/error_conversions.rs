//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so
//! the conversions live here instead of next to either side.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::forms::catalog::CatalogQueryFormError;
    use crate::services::ServiceError;

    impl From<CatalogQueryFormError> for ServiceError {
        fn from(val: CatalogQueryFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
