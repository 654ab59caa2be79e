use crate::domain::catalog::{
    CatalogPage, CatalogPageRequest, CatalogRow, PageWindow, total_pages,
};
use crate::repository::{CatalogListQuery, CatalogReader};

use super::{CatalogValidationError, ServiceError, ServiceResult};

/// Core business logic for the `/ProductCatalog` endpoint.
///
/// Validates the category and description filters against the catalog before
/// any product query runs, then loads the requested window of the filtered
/// inner join, checks the page bounds against the total count and finally
/// sorts and projects the page. The window starts `page_size * page_number`
/// rows in and sorting only reorders that window. Repository errors are
/// converted into `ServiceError::Internal` so that the HTTP route can remain
/// a thin wrapper.
pub fn get_catalog_page<R>(request: CatalogPageRequest, repo: &R) -> ServiceResult<CatalogPage>
where
    R: CatalogReader,
{
    let CatalogPageRequest {
        filter,
        sort,
        page_number,
        page_size,
    } = request;

    if let Some(category) = &filter.category {
        match repo.category_exists(category) {
            Ok(true) => {}
            Ok(false) => {
                log::debug!("Rejected unknown category filter '{category}'");
                return Err(CatalogValidationError::InvalidCategory.into());
            }
            Err(e) => {
                log::error!("Failed to look up category: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    if let Some(description) = &filter.description {
        match repo.description_exists(description) {
            Ok(true) => {}
            Ok(false) => {
                log::debug!("Rejected unknown description filter '{description}'");
                return Err(CatalogValidationError::InvalidDescription.into());
            }
            Err(e) => {
                log::error!("Failed to look up description: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    let window = PageWindow::for_page(page_number, page_size);
    let (total_count, mut entries) =
        match repo.list_catalog(CatalogListQuery::new(filter).window(window)) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Failed to list catalog: {e}");
                return Err(ServiceError::Internal);
            }
        };

    let total_pages = total_pages(total_count, page_size);

    if page_size.get() > total_count {
        return Err(CatalogValidationError::InvalidPageSize.into());
    }
    if page_number.get() > total_pages {
        return Err(CatalogValidationError::InvalidPageNumber.into());
    }

    sort.apply(&mut entries);

    Ok(CatalogPage {
        current_page: page_number.get(),
        page_size: page_size.get(),
        total_count,
        total_pages,
        rows: entries.into_iter().map(CatalogRow::from).collect(),
    })
}
