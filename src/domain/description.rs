use serde::{Deserialize, Serialize};

use crate::domain::types::DescriptionId;

/// Localized description text linked to a product model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Description {
    pub id: DescriptionId,
    pub text: String,
}
