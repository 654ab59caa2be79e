use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::catalog::CatalogEntry;
use crate::domain::types::FilterText;
use crate::models::category::Category as DbCategory;
use crate::models::description::Description as DbDescription;
use crate::models::photo::Photo as DbPhoto;
use crate::models::product::Product as DbProduct;
use crate::repository::{CatalogListQuery, CatalogReader, DieselRepository, RepositoryResult};

type JoinedRow = (DbProduct, DbDescription, DbCategory, DbPhoto);

fn into_entry(row: JoinedRow) -> RepositoryResult<CatalogEntry> {
    let (product, description, category, photo) = row;
    Ok(CatalogEntry {
        product: product.try_into()?,
        description: description.try_into()?,
        category: category.try_into()?,
        photo: photo.try_into()?,
    })
}

fn to_sql_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl CatalogReader for DieselRepository {
    fn category_exists(&self, name: &FilterText) -> RepositoryResult<bool> {
        use crate::schema::product_categories;

        let mut conn = self.conn()?;

        // SQLite's lower() only folds ASCII, so compare in Rust.
        let names = product_categories::table
            .select(product_categories::name)
            .load::<String>(&mut conn)?;

        Ok(names.iter().any(|stored| name.matches_ignoring_case(stored)))
    }

    fn description_exists(&self, text: &FilterText) -> RepositoryResult<bool> {
        use crate::schema::product_descriptions;

        let mut conn = self.conn()?;

        let descriptions = product_descriptions::table
            .select(product_descriptions::description)
            .load::<String>(&mut conn)?;

        Ok(descriptions
            .iter()
            .any(|stored| text.matches_ignoring_case(stored)))
    }

    fn list_catalog(
        &self,
        query: CatalogListQuery,
    ) -> RepositoryResult<(usize, Vec<CatalogEntry>)> {
        use crate::schema::{
            product_categories, product_descriptions, product_model_descriptions,
            product_models, product_photos, product_product_photos, product_subcategories,
            products,
        };

        let mut conn = self.conn()?;
        let filter = &query.filter;

        let query_builder = || {
            let mut items = products::table
                .inner_join(
                    product_product_photos::table
                        .on(product_product_photos::product_id.eq(products::id)),
                )
                .inner_join(
                    product_photos::table
                        .on(product_photos::id.eq(product_product_photos::product_photo_id)),
                )
                .inner_join(
                    product_models::table
                        .on(products::product_model_id.eq(product_models::id.nullable())),
                )
                .inner_join(
                    product_model_descriptions::table
                        .on(product_model_descriptions::product_model_id.eq(product_models::id)),
                )
                .inner_join(
                    product_descriptions::table.on(product_descriptions::id
                        .eq(product_model_descriptions::product_description_id)),
                )
                .inner_join(
                    product_subcategories::table.on(products::product_subcategory_id
                        .eq(product_subcategories::id.nullable())),
                )
                .inner_join(
                    product_categories::table
                        .on(product_categories::id.eq(product_subcategories::product_category_id)),
                )
                .into_boxed::<Sqlite>();

            if let Some(name) = &filter.name {
                items = items.filter(products::name.eq(name.as_str().to_owned()));
            }
            if let Some(number) = &filter.product_number {
                items = items.filter(products::product_number.eq(number.as_str().to_owned()));
            }
            if let Some(cost) = filter.standard_cost {
                items = items.filter(products::standard_cost.eq(cost.get()));
            }
            if let Some(weight) = filter.weight {
                items = items.filter(products::weight.eq(weight.get()));
            }
            if let Some(modified_date) = filter.modified_date {
                items = items.filter(products::modified_date.eq(modified_date));
            }
            if let Some(category) = &filter.category {
                items = items.filter(product_categories::name.eq(category.as_str().to_owned()));
            }
            if let Some(description) = &filter.description {
                items = items
                    .filter(product_descriptions::description.eq(description.as_str().to_owned()));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder()
            .select((
                DbProduct::as_select(),
                DbDescription::as_select(),
                DbCategory::as_select(),
                DbPhoto::as_select(),
            ))
            .order((
                products::id.asc(),
                product_descriptions::id.asc(),
                product_photos::id.asc(),
            ));

        if let Some(window) = &query.window {
            items = items
                .offset(to_sql_bound(window.offset))
                .limit(to_sql_bound(window.limit));
        }

        let items = items
            .load::<JoinedRow>(&mut conn)?
            .into_iter()
            .map(into_entry)
            .collect::<RepositoryResult<Vec<CatalogEntry>>>()?;

        Ok((total, items))
    }
}
