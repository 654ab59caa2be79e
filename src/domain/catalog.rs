//! Catalog query vocabulary: joined entries, filters, sort directives and the
//! projected page returned to clients.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::description::Description;
use crate::domain::photo::Photo;
use crate::domain::product::Product;
use crate::domain::types::{
    FilterText, PageNumber, PageSize, ProductWeight, StandardCost, TypeConstraintError,
};

/// Value projected into [`CatalogRow::photo`] when a photo has no thumbnail.
pub const MISSING_PHOTO: &str = "N/A";

/// One tuple of the product/description/category/photo inner join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub product: Product,
    pub description: Description,
    pub category: Category,
    pub photo: Photo,
}

/// Optional equality predicates applied to the joined catalog.
///
/// An absent predicate matches everything. The builder methods fold the
/// empty string and a zero cost/weight into "absent", so there is no way to
/// filter for those literal values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub name: Option<FilterText>,
    pub product_number: Option<FilterText>,
    pub standard_cost: Option<StandardCost>,
    pub weight: Option<ProductWeight>,
    pub modified_date: Option<NaiveDateTime>,
    pub category: Option<FilterText>,
    pub description: Option<FilterText>,
}

impl CatalogFilter {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = FilterText::from_optional(Some(name));
        self
    }

    pub fn product_number(mut self, product_number: impl Into<String>) -> Self {
        self.product_number = FilterText::from_optional(Some(product_number));
        self
    }

    pub fn standard_cost(mut self, cost: StandardCost) -> Self {
        self.standard_cost = Some(cost).filter(|c| c.get() != 0.0);
        self
    }

    pub fn weight(mut self, weight: ProductWeight) -> Self {
        self.weight = Some(weight).filter(|w| w.get() != 0.0);
        self
    }

    pub fn modified_date(mut self, modified_date: NaiveDateTime) -> Self {
        self.modified_date = Some(modified_date);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = FilterText::from_optional(Some(category));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = FilterText::from_optional(Some(description));
        self
    }

    /// Evaluate every active predicate against `entry`.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let product = &entry.product;

        self.name
            .as_ref()
            .is_none_or(|name| product.name.as_str() == name.as_str())
            && self
                .product_number
                .as_ref()
                .is_none_or(|number| product.product_number.as_str() == number.as_str())
            && self
                .standard_cost
                .is_none_or(|cost| product.standard_cost == cost)
            && self.weight.is_none_or(|weight| product.weight == Some(weight))
            && self
                .modified_date
                .is_none_or(|date| product.modified_date == date)
            && self
                .category
                .as_ref()
                .is_none_or(|category| entry.category.name.as_str() == category.as_str())
            && self
                .description
                .as_ref()
                .is_none_or(|description| entry.description.text == description.as_str())
    }
}

/// Per-field sort directive.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
    /// Leave the order untouched.
    #[default]
    Default,
}

impl SortDirection {
    /// Orient an ascending comparison result according to this directive.
    pub fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
            Self::Default => Ordering::Equal,
        }
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    /// Accepts the directive names in any case and their ordinals `0`, `1`, `2`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ascending" | "0" => Ok(Self::Ascending),
            "descending" | "1" => Ok(Self::Descending),
            "default" | "2" => Ok(Self::Default),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "sort direction: {other}"
            ))),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
            Self::Default => "Default",
        };
        write!(f, "{name}")
    }
}

/// Fields a catalog page can be ordered by.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    ProductNumber,
    StandardCost,
    Weight,
    ModifiedDate,
    CategoryName,
}

impl SortField {
    /// Evaluation order of the directives. A later non-default directive
    /// replaces any earlier one.
    pub const PRECEDENCE: [SortField; 6] = [
        SortField::Name,
        SortField::ProductNumber,
        SortField::StandardCost,
        SortField::Weight,
        SortField::ModifiedDate,
        SortField::CategoryName,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::ProductNumber => 1,
            Self::StandardCost => 2,
            Self::Weight => 3,
            Self::ModifiedDate => 4,
            Self::CategoryName => 5,
        }
    }

    /// Ascending comparison of two entries on this field.
    ///
    /// Strings compare ordinally and a missing weight sorts first.
    pub fn compare(self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            Self::Name => a.product.name.cmp(&b.product.name),
            Self::ProductNumber => a.product.product_number.cmp(&b.product.product_number),
            Self::StandardCost => a
                .product
                .standard_cost
                .get()
                .total_cmp(&b.product.standard_cost.get()),
            Self::Weight => match (a.product.weight, b.product.weight) {
                (Some(a), Some(b)) => a.get().total_cmp(&b.get()),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::ModifiedDate => a.product.modified_date.cmp(&b.product.modified_date),
            Self::CategoryName => a.category.name.cmp(&b.category.name),
        }
    }
}

/// One sort directive per [`SortField`].
///
/// Directives do not compose: only the last non-default one in
/// [`SortField::PRECEDENCE`] order is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogSort {
    directions: [SortDirection; 6],
}

impl CatalogSort {
    pub fn by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.directions[field.index()] = direction;
        self
    }

    pub fn direction(&self, field: SortField) -> SortDirection {
        self.directions[field.index()]
    }

    /// The single directive that determines the order, if any.
    pub fn effective(&self) -> Option<(SortField, SortDirection)> {
        SortField::PRECEDENCE
            .iter()
            .rev()
            .map(|&field| (field, self.direction(field)))
            .find(|(_, direction)| *direction != SortDirection::Default)
    }

    /// Stable in-place sort of `entries` by the effective directive.
    pub fn apply(&self, entries: &mut [CatalogEntry]) {
        if let Some((field, direction)) = self.effective() {
            entries.sort_by(|a, b| direction.orient(field.compare(a, b)));
        }
    }
}

/// Everything a caller supplies to fetch one catalog page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPageRequest {
    pub filter: CatalogFilter,
    pub sort: CatalogSort,
    pub page_number: PageNumber,
    pub page_size: PageSize,
}

/// Offset/limit slice of the joined catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl PageWindow {
    /// Window for `page_number`.
    ///
    /// The offset is `page_size * page_number`, so page 1 starts after the
    /// first `page_size` rows.
    pub fn for_page(page_number: PageNumber, page_size: PageSize) -> Self {
        Self {
            offset: page_size.get().saturating_mul(page_number.get()),
            limit: page_size.get(),
        }
    }
}

/// Number of pages reported for `total_count` rows, rounded down.
pub fn total_pages(total_count: usize, page_size: PageSize) -> usize {
    total_count / page_size.get()
}

/// Client-facing projection of a [`CatalogEntry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Photo")]
    pub photo: String,
}

impl From<CatalogEntry> for CatalogRow {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            category: entry.category.name.into_inner(),
            description: entry.description.text,
            photo: entry
                .photo
                .thumbnail_file_name
                .unwrap_or_else(|| MISSING_PHOTO.to_string()),
        }
    }
}

/// A page of catalog rows plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub current_page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    #[serde(rename = "Products")]
    pub rows: Vec<CatalogRow>,
}
