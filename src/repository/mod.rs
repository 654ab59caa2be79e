use crate::db::{DbConnection, DbPool};
use crate::domain::catalog::{CatalogEntry, CatalogFilter, PageWindow};
use crate::domain::types::FilterText;

pub mod catalog;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing the joined catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogListQuery {
    /// Equality predicates on products, categories and descriptions.
    pub filter: CatalogFilter,
    /// Slice of the filtered rows to load. `None` loads all of them.
    pub window: Option<PageWindow>,
}

impl CatalogListQuery {
    pub fn new(filter: CatalogFilter) -> Self {
        Self {
            filter,
            window: None,
        }
    }

    pub fn window(mut self, window: PageWindow) -> Self {
        self.window = Some(window);
        self
    }
}

/// Read-only access to the product catalog.
pub trait CatalogReader {
    /// Whether a category named `name` exists, ignoring case.
    fn category_exists(&self, name: &FilterText) -> RepositoryResult<bool>;
    /// Whether a description with text `text` exists, ignoring case.
    fn description_exists(&self, text: &FilterText) -> RepositoryResult<bool>;
    /// Count the inner join of products with their description, category and
    /// photo relations after filtering, and load the requested window of it.
    ///
    /// Rows come back in product, description, photo identifier order.
    fn list_catalog(
        &self,
        query: CatalogListQuery,
    ) -> RepositoryResult<(usize, Vec<CatalogEntry>)>;
}
