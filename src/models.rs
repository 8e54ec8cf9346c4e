// src/models.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use crate::entity::{Entity, FieldValue, Relation, is_included, try_get_joined};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductBrand {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductType {
    pub id: i32,
    pub name: String,
}

/// Produkt z katalogu. Relacje `product_brand` i `product_type` są wypełnione
/// tylko wtedy, gdy specyfikacja je dołączyła.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub picture_url: String,
    pub price: Decimal,
    pub product_brand_id: i32,
    pub product_type_id: i32,
    pub product_brand: Option<ProductBrand>,
    pub product_type: Option<ProductType>,
}

impl Product {
    pub const BRAND: Relation = Relation {
        name: "product_brand",
        table: "product_brands",
        alias: "pb",
        foreign_key: "product_brand_id",
        columns: &["name"],
    };

    pub const TYPE: Relation = Relation {
        name: "product_type",
        table: "product_types",
        alias: "pt",
        foreign_key: "product_type_id",
        columns: &["name"],
    };
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let product_brand_id: i32 = row.try_get("product_brand_id")?;
        let product_type_id: i32 = row.try_get("product_type_id")?;

        let product_brand = try_get_joined::<String>(row, &Product::BRAND, "name")?
            .map(|name| ProductBrand {
                id: product_brand_id,
                name,
            });
        let product_type = try_get_joined::<String>(row, &Product::TYPE, "name")?
            .map(|name| ProductType {
                id: product_type_id,
                name,
            });

        Ok(Product {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            picture_url: row.try_get("picture_url")?,
            price: row.try_get("price")?,
            product_brand_id,
            product_type_id,
            product_brand,
            product_type,
        })
    }
}

impl Entity for Product {
    const TABLE: &'static str = "products";
    const RELATIONS: &'static [&'static Relation] = &[&Product::BRAND, &Product::TYPE];

    fn id(&self) -> i32 {
        self.id
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "id" => Some(FieldValue::Int(self.id)),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "picture_url" => Some(FieldValue::Text(self.picture_url.clone())),
            "price" => Some(FieldValue::Decimal(self.price)),
            "product_brand_id" => Some(FieldValue::Int(self.product_brand_id)),
            "product_type_id" => Some(FieldValue::Int(self.product_type_id)),
            _ => None,
        }
    }

    fn retain_relations(&mut self, included: &[&'static Relation]) {
        if !is_included(included, &Product::BRAND) {
            self.product_brand = None;
        }
        if !is_included(included, &Product::TYPE) {
            self.product_type = None;
        }
    }
}

impl Entity for ProductBrand {
    const TABLE: &'static str = "product_brands";

    fn id(&self) -> i32 {
        self.id
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "id" => Some(FieldValue::Int(self.id)),
            "name" => Some(FieldValue::Text(self.name.clone())),
            _ => None,
        }
    }
}

impl Entity for ProductType {
    const TABLE: &'static str = "product_types";

    fn id(&self) -> i32 {
        self.id
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "id" => Some(FieldValue::Int(self.id)),
            "name" => Some(FieldValue::Text(self.name.clone())),
            _ => None,
        }
    }
}
