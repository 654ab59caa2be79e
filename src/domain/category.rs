use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// Top-level product category reached through a product's subcategory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
}
