pub mod catalog;
pub mod errors;

pub use errors::{CatalogValidationError, ServiceError, ServiceResult};
