use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ModelId, ProductId, ProductName, ProductNumber, ProductWeight, StandardCost, SubcategoryId,
};

/// A sellable product as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub product_number: ProductNumber,
    pub standard_cost: StandardCost,
    /// Not every product is weighed.
    pub weight: Option<ProductWeight>,
    pub modified_date: NaiveDateTime,
    pub subcategory_id: Option<SubcategoryId>,
    pub model_id: Option<ModelId>,
}
