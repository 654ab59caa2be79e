//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use product_catalog::db::{DbConnection, DbPool, establish_connection_pool};
use product_catalog::schema::{
    product_categories, product_descriptions, product_model_descriptions, product_models,
    product_photos, product_product_photos, product_subcategories, products,
};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn conn(&self) -> DbConnection {
        self.pool
            .get()
            .expect("should acquire DB connection for setup")
    }
}

pub fn timestamp(secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
}

pub fn insert_category(conn: &mut DbConnection, name: &str) -> i32 {
    diesel::insert_into(product_categories::table)
        .values(product_categories::name.eq(name))
        .returning(product_categories::id)
        .get_result(conn)
        .expect("should create category")
}

pub fn insert_subcategory(conn: &mut DbConnection, category_id: i32, name: &str) -> i32 {
    diesel::insert_into(product_subcategories::table)
        .values((
            product_subcategories::product_category_id.eq(category_id),
            product_subcategories::name.eq(name),
        ))
        .returning(product_subcategories::id)
        .get_result(conn)
        .expect("should create subcategory")
}

pub fn insert_model(conn: &mut DbConnection, name: &str) -> i32 {
    diesel::insert_into(product_models::table)
        .values(product_models::name.eq(name))
        .returning(product_models::id)
        .get_result(conn)
        .expect("should create model")
}

/// Insert a description and link it to `model_id`.
pub fn insert_description(conn: &mut DbConnection, model_id: i32, text: &str) -> i32 {
    let description_id = diesel::insert_into(product_descriptions::table)
        .values(product_descriptions::description.eq(text))
        .returning(product_descriptions::id)
        .get_result(conn)
        .expect("should create description");

    diesel::insert_into(product_model_descriptions::table)
        .values((
            product_model_descriptions::product_model_id.eq(model_id),
            product_model_descriptions::product_description_id.eq(description_id),
        ))
        .execute(conn)
        .expect("should link description to model");

    description_id
}

/// Column values for a product row.
pub struct ProductSeed<'a> {
    pub name: &'a str,
    pub number: &'a str,
    pub cost: f64,
    pub weight: Option<f64>,
    pub subcategory_id: Option<i32>,
    pub model_id: Option<i32>,
    pub modified_date: NaiveDateTime,
}

pub fn insert_product(conn: &mut DbConnection, seed: ProductSeed<'_>) -> i32 {
    diesel::insert_into(products::table)
        .values((
            products::name.eq(seed.name),
            products::product_number.eq(seed.number),
            products::standard_cost.eq(seed.cost),
            products::weight.eq(seed.weight),
            products::product_subcategory_id.eq(seed.subcategory_id),
            products::product_model_id.eq(seed.model_id),
            products::modified_date.eq(seed.modified_date),
        ))
        .returning(products::id)
        .get_result(conn)
        .expect("should create product")
}

/// Insert a photo and link it to `product_id`.
pub fn insert_photo(conn: &mut DbConnection, product_id: i32, thumbnail: Option<&str>) -> i32 {
    let photo_id = diesel::insert_into(product_photos::table)
        .values(product_photos::thumbnail_photo_file_name.eq(thumbnail))
        .returning(product_photos::id)
        .get_result(conn)
        .expect("should create photo");

    diesel::insert_into(product_product_photos::table)
        .values((
            product_product_photos::product_id.eq(product_id),
            product_product_photos::product_photo_id.eq(photo_id),
        ))
        .execute(conn)
        .expect("should link photo to product");

    photo_id
}

/// Seed `count` fully related products in category "Bikes".
///
/// Product `i` (1-based) is named `Product {count + 1 - i:02}`, costs `i`, has
/// one description `Description {i}` and one photo `thumb_{i}.gif`.
pub fn seed_catalog(conn: &mut DbConnection, count: i64) {
    let category_id = insert_category(conn, "Bikes");
    let subcategory_id = insert_subcategory(conn, category_id, "Road Bikes");

    for i in 1..=count {
        let model_id = insert_model(conn, &format!("Model {i}"));
        insert_description(conn, model_id, &format!("Description {i}"));
        let product_id = insert_product(
            conn,
            ProductSeed {
                name: &format!("Product {:02}", count + 1 - i),
                number: &format!("PN-{i:03}"),
                cost: i as f64,
                weight: Some(i as f64),
                subcategory_id: Some(subcategory_id),
                model_id: Some(model_id),
                modified_date: timestamp(i * 60),
            },
        );
        let thumbnail = format!("thumb_{i}.gif");
        insert_photo(conn, product_id, Some(&thumbnail));
    }
}
