use product_catalog::domain::catalog::{CatalogFilter, PageWindow};
use product_catalog::domain::types::{FilterText, ProductWeight, StandardCost};
use product_catalog::repository::{CatalogListQuery, CatalogReader, DieselRepository};

mod common;

use common::{
    ProductSeed, insert_category, insert_description, insert_model, insert_photo,
    insert_product, insert_subcategory, timestamp,
};

fn product_names(entries: &[product_catalog::domain::catalog::CatalogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.product.name.as_str()).collect()
}

#[test]
fn excludes_products_missing_any_joined_relation() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();

    let category_id = insert_category(&mut conn, "Bikes");
    let subcategory_id = insert_subcategory(&mut conn, category_id, "Road Bikes");
    let described_model = insert_model(&mut conn, "Road-150");
    insert_description(&mut conn, described_model, "Lightweight road frame.");
    let bare_model = insert_model(&mut conn, "Prototype");

    let seed = |name: &'static str, number: &'static str, subcategory, model| ProductSeed {
        name,
        number,
        cost: 10.0,
        weight: None,
        subcategory_id: subcategory,
        model_id: model,
        modified_date: timestamp(0),
    };

    let complete = insert_product(
        &mut conn,
        seed("Complete", "PN-1", Some(subcategory_id), Some(described_model)),
    );
    insert_photo(&mut conn, complete, Some("complete.gif"));

    // No photo link.
    insert_product(
        &mut conn,
        seed("No Photo", "PN-2", Some(subcategory_id), Some(described_model)),
    );

    // No subcategory, hence no category.
    let uncategorized = insert_product(
        &mut conn,
        seed("No Category", "PN-3", None, Some(described_model)),
    );
    insert_photo(&mut conn, uncategorized, Some("uncategorized.gif"));

    // Model without any description.
    let undescribed = insert_product(
        &mut conn,
        seed("No Description", "PN-4", Some(subcategory_id), Some(bare_model)),
    );
    insert_photo(&mut conn, undescribed, Some("undescribed.gif"));

    // No model at all.
    let modelless = insert_product(&mut conn, seed("No Model", "PN-5", Some(subcategory_id), None));
    insert_photo(&mut conn, modelless, None);

    let (total, entries) = repo
        .list_catalog(CatalogListQuery::default())
        .expect("should list catalog");

    assert_eq!(total, 1);
    assert_eq!(product_names(&entries), vec!["Complete"]);
    assert_eq!(entries[0].category.name.as_str(), "Bikes");
    assert_eq!(entries[0].description.text, "Lightweight road frame.");
    assert_eq!(
        entries[0].photo.thumbnail_file_name.as_deref(),
        Some("complete.gif")
    );
}

#[test]
fn yields_one_entry_per_description_and_photo_pair() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();

    let category_id = insert_category(&mut conn, "Accessories");
    let subcategory_id = insert_subcategory(&mut conn, category_id, "Helmets");
    let model_id = insert_model(&mut conn, "Sport-100");
    insert_description(&mut conn, model_id, "Universal fit.");
    insert_description(&mut conn, model_id, "Ajustement universel.");
    let product_id = insert_product(
        &mut conn,
        ProductSeed {
            name: "Sport-100 Helmet, Red",
            number: "HL-U509-R",
            cost: 13.0863,
            weight: None,
            subcategory_id: Some(subcategory_id),
            model_id: Some(model_id),
            modified_date: timestamp(0),
        },
    );
    insert_photo(&mut conn, product_id, Some("helmet_front.gif"));
    insert_photo(&mut conn, product_id, None);

    let (total, entries) = repo
        .list_catalog(CatalogListQuery::default())
        .expect("should list catalog");

    assert_eq!(total, 4);
    let pairs: Vec<(&str, Option<&str>)> = entries
        .iter()
        .map(|e| {
            (
                e.description.text.as_str(),
                e.photo.thumbnail_file_name.as_deref(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Universal fit.", Some("helmet_front.gif")),
            ("Universal fit.", None),
            ("Ajustement universel.", Some("helmet_front.gif")),
            ("Ajustement universel.", None),
        ]
    );
}

#[test]
fn applies_equality_filters() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();
    common::seed_catalog(&mut conn, 5);

    let list = |filter: CatalogFilter| {
        repo.list_catalog(CatalogListQuery::new(filter))
            .expect("should list catalog")
    };

    let (total, entries) = list(CatalogFilter::default().name("Product 02"));
    assert_eq!(total, 1);
    assert_eq!(entries[0].product.product_number.as_str(), "PN-004");

    let (total, _) = list(CatalogFilter::default().product_number("PN-001"));
    assert_eq!(total, 1);

    let (total, entries) =
        list(CatalogFilter::default().standard_cost(StandardCost::new(3.0).unwrap()));
    assert_eq!(total, 1);
    assert_eq!(entries[0].product.name.as_str(), "Product 03");

    let (total, _) = list(CatalogFilter::default().weight(ProductWeight::new(5.0).unwrap()));
    assert_eq!(total, 1);

    let (total, entries) = list(CatalogFilter::default().modified_date(timestamp(120)));
    assert_eq!(total, 1);
    assert_eq!(entries[0].product.id.get(), 2);

    let (total, _) = list(CatalogFilter::default().category("Bikes"));
    assert_eq!(total, 5);

    let (total, _) = list(CatalogFilter::default().category("bikes"));
    assert_eq!(total, 0);

    let (total, _) = list(
        CatalogFilter::default()
            .description("Description 4")
            .name("Product 02"),
    );
    assert_eq!(total, 1);

    let (total, _) = list(
        CatalogFilter::default()
            .description("Description 4")
            .name("Product 01"),
    );
    assert_eq!(total, 0);
}

#[test]
fn zero_cost_filter_matches_everything() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();
    common::seed_catalog(&mut conn, 3);

    let filter = CatalogFilter::default()
        .standard_cost(StandardCost::new(0.0).unwrap())
        .weight(ProductWeight::new(0.0).unwrap())
        .name("");

    let (total, entries) = repo
        .list_catalog(CatalogListQuery::new(filter))
        .expect("should list catalog");

    assert_eq!(total, 3);
    assert_eq!(entries.len(), 3);
}

#[test]
fn window_counts_everything_but_loads_a_slice() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();
    common::seed_catalog(&mut conn, 12);

    let (total, entries) = repo
        .list_catalog(
            CatalogListQuery::default().window(PageWindow {
                offset: 10,
                limit: 10,
            }),
        )
        .expect("should list catalog");

    assert_eq!(total, 12);
    let ids: Vec<i32> = entries.iter().map(|e| e.product.id.get()).collect();
    assert_eq!(ids, vec![11, 12]);
}

#[test]
fn category_and_description_lookups_ignore_case() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();
    insert_category(&mut conn, "Clothing");
    let model_id = insert_model(&mut conn, "Classic Vest");
    insert_description(&mut conn, model_id, "Light-weight, wind-resistant.");

    let exists = |name: &str| {
        repo.category_exists(&FilterText::new(name).unwrap())
            .expect("should query categories")
    };
    assert!(exists("Clothing"));
    assert!(exists("cLOTHING"));
    assert!(!exists("Clothing "));
    assert!(!exists("Components"));

    let described = |text: &str| {
        repo.description_exists(&FilterText::new(text).unwrap())
            .expect("should query descriptions")
    };
    assert!(described("LIGHT-WEIGHT, WIND-RESISTANT."));
    assert!(!described("Heavy."));
}

#[test]
fn lookups_fold_non_ascii_case() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();
    insert_category(&mut conn, "Électronique");
    let model_id = insert_model(&mut conn, "Ärmel");
    insert_description(&mut conn, model_id, "Größe M, ÜBERZIEHER");

    let exists = |name: &str| {
        repo.category_exists(&FilterText::new(name).unwrap())
            .expect("should query categories")
    };
    assert!(exists("électronique"));
    assert!(exists("ÉLECTRONIQUE"));
    assert!(!exists("electronique"));

    assert!(
        repo.description_exists(&FilterText::new("größe m, überzieher").unwrap())
            .expect("should query descriptions")
    );
}

#[test]
fn stored_text_is_returned_verbatim() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let mut conn = test_db.conn();

    let category_id = insert_category(&mut conn, " Bikes ");
    let subcategory_id = insert_subcategory(&mut conn, category_id, "Road Bikes");
    let model_id = insert_model(&mut conn, "Road-150");
    insert_description(&mut conn, model_id, "Frame.");

    for (name, number) in [(" ", "PN-1"), ("  Padded  ", "")] {
        let product_id = insert_product(
            &mut conn,
            ProductSeed {
                name,
                number,
                cost: 1.0,
                weight: None,
                subcategory_id: Some(subcategory_id),
                model_id: Some(model_id),
                modified_date: timestamp(0),
            },
        );
        insert_photo(&mut conn, product_id, None);
    }

    let (total, entries) = repo
        .list_catalog(CatalogListQuery::default())
        .expect("blank or padded text should not fail the query");

    assert_eq!(total, 2);
    assert_eq!(product_names(&entries), vec![" ", "  Padded  "]);
    assert_eq!(entries[1].product.product_number.as_str(), "");
    assert_eq!(entries[0].category.name.as_str(), " Bikes ");

    let (total, _) = repo
        .list_catalog(CatalogListQuery::new(
            CatalogFilter::default().category(" Bikes "),
        ))
        .expect("should list catalog");
    assert_eq!(total, 2);

    let (total, _) = repo
        .list_catalog(CatalogListQuery::new(CatalogFilter::default().category("Bikes")))
        .expect("should list catalog");
    assert_eq!(total, 0);
}
