//! Testy `PgRepository` na prawdziwym PostgreSQL.
//!
//! Wymagają `DATABASE_URL`; uruchamiane przez `cargo test -- --ignored`.
//! Każdy test tworzy własny schemat z `db/schema.sql` i usuwa go na końcu.

use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use catalog_api::entity::FieldValue;
use catalog_api::models::{Product, ProductBrand};
use catalog_api::repository::{GenericRepository, PgRepository};
use catalog_api::specification::Specification;

const SCHEMA_SQL: &str = include_str!("../db/schema.sql");

const FIXTURE_SQL: &str = r#"
    INSERT INTO product_brands (id, name) VALUES (1, 'Angular'), (2, 'NetCore');
    INSERT INTO product_types (id, name) VALUES (1, 'Boards'), (2, 'Hats');
    INSERT INTO products (id, name, description, picture_url, price, product_brand_id, product_type_id) VALUES
        (1, 'Angular Board', 'Fast board', 'images/products/a.png', 199.99, 1, 1),
        (2, 'Core Hat', 'Woollen hat', 'images/products/b.png', 15.50, 2, 2),
        (3, 'Core Board', 'Sturdy board', 'images/products/c.png', 120.00, 2, 1);
"#;

struct TestSchema {
    admin: PgPool,
    pool: PgPool,
    name: String,
}

impl TestSchema {
    async fn new(test_name: &str) -> TestSchema {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let name = format!("catalog_{}_{}", test_name, std::process::id());

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .unwrap();
        sqlx::raw_sql(&format!("DROP SCHEMA IF EXISTS {0} CASCADE; CREATE SCHEMA {0}", name))
            .execute(&admin)
            .await
            .unwrap();

        let search_path = format!("SET search_path TO {}", name);
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    sqlx::Executor::execute(&mut *conn, sqlx::raw_sql(&search_path)).await?;
                    Ok(())
                })
            })
            .connect(&database_url)
            .await
            .unwrap();

        sqlx::raw_sql(SCHEMA_SQL).execute(&pool).await.unwrap();
        sqlx::raw_sql(FIXTURE_SQL).execute(&pool).await.unwrap();

        TestSchema { admin, pool, name }
    }

    async fn cleanup(self) {
        self.pool.close().await;
        sqlx::raw_sql(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.name))
            .execute(&self.admin)
            .await
            .unwrap();
    }
}

#[tokio::test]
#[ignore = "wymaga DATABASE_URL"]
async fn test_relations_are_decoded_only_when_included() {
    let schema = TestSchema::new("includes").await;
    let repo = PgRepository::<Product>::new(schema.pool.clone());

    let bare = repo.get_by_id(2).await.unwrap().unwrap();
    assert_eq!(bare.name, "Core Hat");
    assert_eq!(bare.product_brand_id, 2);
    assert!(bare.product_brand.is_none());
    assert!(bare.product_type.is_none());

    let spec = Specification::<Product>::with_id(2)
        .include(&Product::BRAND)
        .include(&Product::TYPE);
    let full = repo.get_entity_with_spec(&spec).await.unwrap().unwrap();
    assert_eq!(full.product_brand.as_ref().map(|b| b.name.as_str()), Some("NetCore"));
    assert_eq!(full.product_type.as_ref().map(|t| t.name.as_str()), Some("Hats"));

    let brand_only = Specification::<Product>::with_id(2).include(&Product::BRAND);
    let partial = repo.get_entity_with_spec(&brand_only).await.unwrap().unwrap();
    assert!(partial.product_brand.is_some());
    assert!(partial.product_type.is_none());

    schema.cleanup().await;
}

#[tokio::test]
#[ignore = "wymaga DATABASE_URL"]
async fn test_numeric_price_decodes_to_decimal_and_sorts() {
    let schema = TestSchema::new("prices").await;
    let repo = PgRepository::<Product>::new(schema.pool.clone());

    let spec = Specification::<Product>::new()
        .include(&Product::BRAND)
        .order_by_descending("price")
        .apply_paging(0, 2);
    let page = repo.list(&spec).await.unwrap();

    let prices: Vec<Decimal> = page.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![Decimal::new(19999, 2), Decimal::new(12000, 2)]);
    assert_eq!(page[0].product_brand.as_ref().map(|b| b.name.as_str()), Some("Angular"));

    schema.cleanup().await;
}

#[tokio::test]
#[ignore = "wymaga DATABASE_URL"]
async fn test_filters_count_and_single_match_agree() {
    let schema = TestSchema::new("filters").await;
    let repo = PgRepository::<Product>::new(schema.pool.clone());

    let spec = Specification::<Product>::new()
        .where_equals("product_brand_id", FieldValue::Int(2))
        .where_contains(&["name", "description"], "BOARD");
    assert_eq!(repo.count(&spec).await.unwrap(), 1);

    let by_brand = Specification::<Product>::new().where_equals("product_brand_id", FieldValue::Int(2));
    assert_eq!(repo.count(&by_brand).await.unwrap(), 2);
    let first = repo.get_entity_with_spec(&by_brand).await.unwrap().unwrap();
    assert_eq!(first.id, 2);

    assert!(repo.get_by_id(99).await.unwrap().is_none());

    let brands = PgRepository::<ProductBrand>::new(schema.pool.clone())
        .list_all()
        .await
        .unwrap();
    assert_eq!(brands.len(), 2);

    schema.cleanup().await;
}
