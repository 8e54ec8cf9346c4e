// src/dtos.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductToReturnDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub picture_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub product_brand: String,
    pub product_type: String,
}

impl ProductToReturnDto {
    /// Spłaszcza markę i typ do nazw; adres zdjęcia jest rozwiązywany względem `api_url`.
    pub fn from_product(product: Product, api_url: &str) -> Self {
        ProductToReturnDto {
            picture_url: resolve_picture_url(&product.picture_url, api_url),
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            product_brand: product.product_brand.map(|b| b.name).unwrap_or_default(),
            product_type: product.product_type.map(|t| t.name).unwrap_or_default(),
        }
    }
}

fn resolve_picture_url(picture_url: &str, api_url: &str) -> String {
    if picture_url.is_empty()
        || picture_url.starts_with("http://")
        || picture_url.starts_with("https://")
    {
        return picture_url.to_string();
    }
    format!(
        "{}/{}",
        api_url.trim_end_matches('/'),
        picture_url.trim_start_matches('/')
    )
}
