use serde::{Deserialize, Serialize};

use crate::domain::types::PhotoId;

/// Product photo metadata. Only the thumbnail file name is surfaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: PhotoId,
    pub thumbnail_file_name: Option<String>,
}
