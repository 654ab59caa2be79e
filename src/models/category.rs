use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Diesel model representing the `product_categories` table.
///
/// Only the columns projected into the catalog are selected.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::from(category.name),
        })
    }
}
