use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use std::sync::Arc;
use tower::ServiceExt; // oneshot()

use catalog_api::models::{ProductBrand, ProductType};
use catalog_api::routes::build_router;
use catalog_api::seed::Catalog;
use catalog_api::state::AppState;

pub const API_URL: &str = "https://shop.test/";

/// 10 produktów, 3 z nich marki 2. Ceny są różne, najdroższe: 9 (95.00) i 4 (80.00).
pub fn fixture_catalog() -> Catalog {
    let brands = vec![
        ProductBrand { id: 1, name: "Angular".to_string() },
        ProductBrand { id: 2, name: "NetCore".to_string() },
        ProductBrand { id: 3, name: "React".to_string() },
    ];
    let types = vec![
        ProductType { id: 1, name: "Boards".to_string() },
        ProductType { id: 2, name: "Hats".to_string() },
    ];

    let mut catalog = Catalog::new(brands, types);
    let rows: [(&str, &str, i64, i32, i32); 10] = [
        ("Angular Board", "Fast board", 5000, 1, 1),
        ("Core Board", "Sturdy board", 6000, 2, 1),
        ("React Board", "Light board", 7000, 3, 1),
        ("Angular Hat", "Warm hat", 8000, 1, 2),
        ("Core Hat", "Woollen hat", 1500, 2, 2),
        ("React Hat", "Summer hat", 2000, 3, 2),
        ("Angular Cap", "Blue cap", 2500, 1, 2),
        ("Core Beanie", "Knitted", 3000, 2, 2),
        ("React Pro Board", "Pro level deck", 9500, 3, 1),
        ("Angular Mini Board", "For kids", 1000, 1, 1),
    ];
    for (name, description, cents, brand_id, type_id) in rows {
        catalog.add_product(
            name,
            description,
            &format!("images/products/{}.png", name.to_lowercase().replace(' ', "-")),
            Decimal::new(cents, 2),
            brand_id,
            type_id,
        );
    }
    catalog
}

pub fn app() -> Router {
    build_router(Arc::new(AppState::in_memory(fixture_catalog(), API_URL)))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
