use diesel::prelude::*;

use crate::domain::description::Description as DomainDescription;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `product_descriptions` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_descriptions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Description {
    pub id: i32,
    pub description: String,
}

impl TryFrom<Description> for DomainDescription {
    type Error = TypeConstraintError;

    fn try_from(description: Description) -> Result<Self, Self::Error> {
        Ok(Self {
            id: description.id.try_into()?,
            text: description.description,
        })
    }
}
