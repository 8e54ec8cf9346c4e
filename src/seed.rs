// src/seed.rs
use rust_decimal::Decimal;

use crate::models::{Product, ProductBrand, ProductType};

/// Komplet danych katalogu dla repozytoriów w pamięci.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub brands: Vec<ProductBrand>,
    pub types: Vec<ProductType>,
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(brands: Vec<ProductBrand>, types: Vec<ProductType>) -> Self {
        Catalog {
            brands,
            types,
            products: Vec::new(),
        }
    }

    /// Dodaje produkt z wypełnionymi relacjami marki i typu.
    pub fn add_product(
        &mut self,
        name: &str,
        description: &str,
        picture_url: &str,
        price: Decimal,
        brand_id: i32,
        type_id: i32,
    ) -> &mut Self {
        let id = self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product_brand = self.brands.iter().find(|b| b.id == brand_id).cloned();
        let product_type = self.types.iter().find(|t| t.id == type_id).cloned();
        if product_brand.is_none() || product_type.is_none() {
            tracing::warn!(
                "Produkt '{}' wskazuje na nieistniejącą markę {} lub typ {}",
                name,
                brand_id,
                type_id
            );
        }

        self.products.push(Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            picture_url: picture_url.to_string(),
            price,
            product_brand_id: brand_id,
            product_type_id: type_id,
            product_brand,
            product_type,
        });
        self
    }
}

fn named<T>(names: &[&str], make: impl Fn(i32, String) -> T) -> Vec<T> {
    names
        .iter()
        .zip(1..)
        .map(|(name, id)| make(id, name.to_string()))
        .collect()
}

/// Przykładowy katalog dla trybu `CATALOG_STORE=memory`.
pub fn demo_catalog() -> Catalog {
    let brands = named(
        &["Angular", "NetCore", "VS Code", "React", "Typescript", "Redis"],
        |id, name| ProductBrand { id, name },
    );
    let types = named(&["Boards", "Hats", "Boots", "Gloves"], |id, name| ProductType {
        id,
        name,
    });

    let mut catalog = Catalog::new(brands, types);
    catalog
        .add_product(
            "Angular Speedster Board 2000",
            "Lightweight board for quick tricks.",
            "images/products/sb-ang1.png",
            Decimal::new(20000, 2),
            1,
            1,
        )
        .add_product(
            "Green Angular Board 3000",
            "Stable deck with a green finish.",
            "images/products/sb-ang2.png",
            Decimal::new(15000, 2),
            1,
            1,
        )
        .add_product(
            "Core Board Speed Rush 3",
            "Fast board for experienced riders.",
            "images/products/sb-core1.png",
            Decimal::new(18000, 2),
            2,
            1,
        )
        .add_product(
            "Net Core Super Board",
            "All-round board for every day.",
            "images/products/sb-core2.png",
            Decimal::new(30000, 2),
            2,
            1,
        )
        .add_product(
            "React Board Super Whizzy Fast",
            "Board with extra grip.",
            "images/products/sb-react1.png",
            Decimal::new(25000, 2),
            4,
            1,
        )
        .add_product(
            "Typescript Entry Board",
            "Entry level board.",
            "images/products/sb-ts1.png",
            Decimal::new(12000, 2),
            5,
            1,
        )
        .add_product(
            "Core Blue Hat",
            "Warm woollen hat.",
            "images/products/hat-core1.png",
            Decimal::new(1000, 2),
            2,
            2,
        )
        .add_product(
            "Green React Woolen Hat",
            "Soft hat for cold days.",
            "images/products/hat-react1.png",
            Decimal::new(800, 2),
            4,
            2,
        )
        .add_product(
            "Purple React Woolen Hat",
            "Soft purple hat.",
            "images/products/hat-react2.png",
            Decimal::new(1500, 2),
            4,
            2,
        )
        .add_product(
            "Blue Code Gloves",
            "Gloves for winter coding sessions.",
            "images/products/glove-code1.png",
            Decimal::new(1800, 2),
            3,
            4,
        )
        .add_product(
            "Green Code Gloves",
            "Gloves with touch screen tips.",
            "images/products/glove-code2.png",
            Decimal::new(1500, 2),
            3,
            4,
        )
        .add_product(
            "Purple React Gloves",
            "Light gloves.",
            "images/products/glove-react1.png",
            Decimal::new(1600, 2),
            4,
            4,
        )
        .add_product(
            "Redis Red Boots",
            "Sturdy boots.",
            "images/products/boot-redis1.png",
            Decimal::new(25000, 2),
            6,
            3,
        )
        .add_product(
            "Core Red Boots",
            "Boots with a red sole.",
            "images/products/boot-core2.png",
            Decimal::new(18999, 2),
            2,
            3,
        );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_products_reference_existing_lookups() {
        let catalog = demo_catalog();
        assert_eq!(catalog.brands.len(), 6);
        assert_eq!(catalog.types.len(), 4);
        assert!(catalog
            .products
            .iter()
            .all(|p| p.product_brand.is_some() && p.product_type.is_some()));
    }

    #[test]
    fn product_ids_are_sequential() {
        let catalog = demo_catalog();
        let ids: Vec<i32> = catalog.products.iter().map(|p| p.id).collect();
        let expected: Vec<i32> = (1..=catalog.products.len() as i32).collect();
        assert_eq!(ids, expected);
    }
}
