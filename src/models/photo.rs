use diesel::prelude::*;

use crate::domain::photo::Photo as DomainPhoto;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `product_photos` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_photos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Photo {
    pub id: i32,
    pub thumbnail_photo_file_name: Option<String>,
}

impl TryFrom<Photo> for DomainPhoto {
    type Error = TypeConstraintError;

    fn try_from(photo: Photo) -> Result<Self, Self::Error> {
        Ok(Self {
            id: photo.id.try_into()?,
            thumbnail_file_name: photo.thumbnail_photo_file_name,
        })
    }
}
