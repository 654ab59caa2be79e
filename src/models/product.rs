use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;
use crate::domain::types::{
    ProductName, ProductNumber, ProductWeight, StandardCost, TypeConstraintError,
};

/// Diesel model representing a row in the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub product_number: String,
    pub standard_cost: f64,
    pub weight: Option<f64>,
    pub product_subcategory_id: Option<i32>,
    pub product_model_id: Option<i32>,
    pub modified_date: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::from(product.name),
            product_number: ProductNumber::from(product.product_number),
            standard_cost: StandardCost::new(product.standard_cost)?,
            weight: product.weight.map(ProductWeight::new).transpose()?,
            modified_date: product.modified_date,
            subcategory_id: product.product_subcategory_id.map(TryInto::try_into).transpose()?,
            model_id: product.product_model_id.map(TryInto::try_into).transpose()?,
        })
    }
}
