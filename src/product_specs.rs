// src/product_specs.rs
//
// Jeden konstruktor specyfikacji produktów zamiast osobnych typów dla listy,
// pojedynczego produktu i zliczania.

use crate::entity::FieldValue;
use crate::filters::{ProductSort, ProductSpecParams};
use crate::models::Product;
use crate::specification::Specification;

const SEARCH_COLUMNS: &[&str] = &["name", "description"];

fn with_types_and_brands(spec: Specification<Product>) -> Specification<Product> {
    spec.include(&Product::BRAND).include(&Product::TYPE)
}

fn filtered(params: &ProductSpecParams) -> Specification<Product> {
    let mut spec = Specification::new();
    if let Some(brand_id) = params.brand_id() {
        spec = spec.where_equals("product_brand_id", FieldValue::Int(brand_id));
    }
    if let Some(type_id) = params.type_id() {
        spec = spec.where_equals("product_type_id", FieldValue::Int(type_id));
    }
    if let Some(search) = params.search() {
        spec = spec.where_contains(SEARCH_COLUMNS, search);
    }
    spec
}

/// Strona listy produktów: filtry, marki i typy, sortowanie, paginacja.
pub fn products_with_types_and_brands(params: &ProductSpecParams) -> Specification<Product> {
    let spec = with_types_and_brands(filtered(params));
    let spec = match params.sort() {
        ProductSort::PriceAsc => spec.order_by("price"),
        ProductSort::PriceDesc => spec.order_by_descending("price"),
        ProductSort::Name => spec.order_by("name"),
    };
    spec.apply_paging(params.skip(), params.page_size())
}

pub fn product_with_type_and_brand(id: i32) -> Specification<Product> {
    with_types_and_brands(Specification::with_id(id))
}

/// Te same filtry co lista, bez relacji, sortowania i paginacji.
pub fn products_with_filters_for_count(params: &ProductSpecParams) -> Specification<Product> {
    filtered(params)
}
