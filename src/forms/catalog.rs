use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::catalog::{CatalogFilter, CatalogPageRequest, CatalogSort, SortField};
use crate::domain::types::{PageNumber, PageSize, ProductWeight, StandardCost};

fn default_page_number() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// Query string accepted by `GET /ProductCatalog`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQueryForm {
    pub name: Option<String>,
    #[serde(rename = "productNum")]
    pub product_number: Option<String>,
    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    pub modified_date: Option<String>,
    pub product_category: Option<String>,
    pub product_description: Option<String>,
    pub name_sort: Option<String>,
    #[serde(rename = "productNumSort")]
    pub product_number_sort: Option<String>,
    pub cost_sort: Option<String>,
    pub weight_sort: Option<String>,
    pub modified_date_sort: Option<String>,
    #[serde(rename = "productcategorySort")]
    pub product_category_sort: Option<String>,
    #[serde(default = "default_page_number")]
    #[validate(range(min = 1))]
    pub page_number: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub page_size: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogQueryFormError {
    /// `{0}` is the query parameter name as clients spell it.
    #[error("Invalid {0} value")]
    InvalidValue(&'static str),
}

impl From<ValidationErrors> for CatalogQueryFormError {
    fn from(value: ValidationErrors) -> Self {
        let fields = value.field_errors();
        [
            ("page_size", "pageSize"),
            ("page_number", "pageNumber"),
            ("cost", "cost"),
            ("weight", "weight"),
        ]
        .into_iter()
        .find(|(field, _)| fields.contains_key(*field))
        .map(|(_, param)| Self::InvalidValue(param))
        .unwrap_or(Self::InvalidValue("query"))
    }
}

/// Parse an ISO-8601 date-time, a bare date taken as midnight, or an RFC 3339
/// timestamp with an offset, converted to UTC.
fn parse_modified_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    value
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date| date.naive_utc())
        })
}

fn parse_sort(
    sort: CatalogSort,
    field: SortField,
    value: Option<&str>,
    param: &'static str,
) -> Result<CatalogSort, CatalogQueryFormError> {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse()
            .map(|direction| sort.by(field, direction))
            .map_err(|_| CatalogQueryFormError::InvalidValue(param)),
        None => Ok(sort),
    }
}

impl TryFrom<CatalogQueryForm> for CatalogPageRequest {
    type Error = CatalogQueryFormError;

    fn try_from(value: CatalogQueryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let mut filter = CatalogFilter::default();
        if let Some(name) = value.name {
            filter = filter.name(name);
        }
        if let Some(number) = value.product_number {
            filter = filter.product_number(number);
        }
        if let Some(cost) = value.cost {
            let cost =
                StandardCost::new(cost).map_err(|_| CatalogQueryFormError::InvalidValue("cost"))?;
            filter = filter.standard_cost(cost);
        }
        if let Some(weight) = value.weight {
            let weight = ProductWeight::new(weight)
                .map_err(|_| CatalogQueryFormError::InvalidValue("weight"))?;
            filter = filter.weight(weight);
        }
        if let Some(modified_date) = value.modified_date.filter(|d| !d.is_empty()) {
            let modified_date = parse_modified_date(&modified_date)
                .ok_or(CatalogQueryFormError::InvalidValue("modifiedDate"))?;
            filter = filter.modified_date(modified_date);
        }
        if let Some(category) = value.product_category {
            filter = filter.category(category);
        }
        if let Some(description) = value.product_description {
            filter = filter.description(description);
        }

        let sort = CatalogSort::default();
        let sort = parse_sort(sort, SortField::Name, value.name_sort.as_deref(), "nameSort")?;
        let sort = parse_sort(
            sort,
            SortField::ProductNumber,
            value.product_number_sort.as_deref(),
            "productNumSort",
        )?;
        let sort = parse_sort(
            sort,
            SortField::StandardCost,
            value.cost_sort.as_deref(),
            "costSort",
        )?;
        let sort = parse_sort(
            sort,
            SortField::Weight,
            value.weight_sort.as_deref(),
            "weightSort",
        )?;
        let sort = parse_sort(
            sort,
            SortField::ModifiedDate,
            value.modified_date_sort.as_deref(),
            "modifiedDateSort",
        )?;
        let sort = parse_sort(
            sort,
            SortField::CategoryName,
            value.product_category_sort.as_deref(),
            "productcategorySort",
        )?;

        let page_number = usize::try_from(value.page_number)
            .ok()
            .and_then(|n| PageNumber::new(n).ok())
            .ok_or(CatalogQueryFormError::InvalidValue("pageNumber"))?;
        let page_size = usize::try_from(value.page_size)
            .ok()
            .and_then(|n| PageSize::new(n).ok())
            .ok_or(CatalogQueryFormError::InvalidValue("pageSize"))?;

        Ok(Self {
            filter,
            sort,
            page_number,
            page_size,
        })
    }
}
