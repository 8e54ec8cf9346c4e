// src/state.rs

use sqlx::PgPool;
use std::sync::Arc;

use crate::memory::InMemoryRepository;
use crate::models::{Product, ProductBrand, ProductType};
use crate::repository::{GenericRepository, PgRepository};
use crate::seed::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn GenericRepository<Product>>,
    pub product_brands: Arc<dyn GenericRepository<ProductBrand>>,
    pub product_types: Arc<dyn GenericRepository<ProductType>>,
    /// Publiczny adres API, względem którego rozwiązywane są adresy zdjęć.
    pub api_url: String,
}

impl AppState {
    pub fn postgres(pool: PgPool, api_url: impl Into<String>) -> Self {
        AppState {
            products: Arc::new(PgRepository::<Product>::new(pool.clone())),
            product_brands: Arc::new(PgRepository::<ProductBrand>::new(pool.clone())),
            product_types: Arc::new(PgRepository::<ProductType>::new(pool)),
            api_url: api_url.into(),
        }
    }

    pub fn in_memory(catalog: Catalog, api_url: impl Into<String>) -> Self {
        AppState {
            products: Arc::new(InMemoryRepository::new(catalog.products)),
            product_brands: Arc::new(InMemoryRepository::new(catalog.brands)),
            product_types: Arc::new(InMemoryRepository::new(catalog.types)),
            api_url: api_url.into(),
        }
    }
}
