// src/handlers.rs
use axum::Json;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::dtos::ProductToReturnDto;
use crate::errors::AppError;
use crate::extractor::ValidatedQuery;
use crate::filters::ProductSpecParams;
use crate::models::{ProductBrand, ProductType};
use crate::pagination::Pagination;
use crate::product_specs;
use crate::state::AppState;

pub async fn list_products(
    State(app_state): State<Arc<AppState>>,
    ValidatedQuery(params): ValidatedQuery<ProductSpecParams>,
) -> Result<Json<Pagination<ProductToReturnDto>>, AppError> {
    tracing::info!(
        "Obsłużono zapytanie GET /api/products z parametrami: {:?}",
        params
    );

    let spec = product_specs::products_with_types_and_brands(&params);
    let count_spec = product_specs::products_with_filters_for_count(&params);

    // Zliczanie i pobranie strony to dwa niezależne zapytania.
    let (total_items, products) = futures::try_join!(
        app_state.products.count(&count_spec),
        app_state.products.list(&spec)
    )?;

    tracing::debug!(
        "Znaleziono {} produktów, zwracam {} (sortowanie: {})",
        total_items,
        products.len(),
        params.sort()
    );

    let data = products
        .into_iter()
        .map(|product| ProductToReturnDto::from_product(product, &app_state.api_url))
        .collect();

    Ok(Json(Pagination::new(
        params.page_index(),
        params.page_size(),
        total_items,
        data,
    )))
}

pub async fn get_product(
    State(app_state): State<Arc<AppState>>,
    WithRejection(Path(product_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<ProductToReturnDto>, AppError> {
    let spec = product_specs::product_with_type_and_brand(product_id);

    match app_state.products.get_entity_with_spec(&spec).await? {
        Some(product) => Ok(Json(ProductToReturnDto::from_product(
            product,
            &app_state.api_url,
        ))),
        None => {
            tracing::warn!("Nie znaleziono produktu o ID: {}", product_id);
            Err(AppError::NotFound(format!(
                "Nie znaleziono produktu o ID {}",
                product_id
            )))
        }
    }
}

pub async fn list_product_brands(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductBrand>>, AppError> {
    let brands = app_state.product_brands.list_all().await?;
    Ok(Json(brands))
}

pub async fn list_product_types(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductType>>, AppError> {
    let types = app_state.product_types.list_all().await?;
    Ok(Json(types))
}

pub async fn fallback_handler(uri: Uri) -> AppError {
    tracing::warn!("Brak trasy dla {}", uri.path());
    AppError::NotFound(format!("Nie znaleziono zasobu {}", uri.path()))
}
