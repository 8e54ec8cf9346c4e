// src/entity.rs
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, Row};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Wartość kolumny używana przez kryteria i sortowanie.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i32),
    Text(String),
    Decimal(Decimal),
}

impl FieldValue {
    /// Porównuje dwie wartości tego samego rodzaju. Różne rodzaje traktujemy jako równe.
    /// Tekst porównujemy bez względu na wielkość liter (jak kolacja bazy), a przy
    /// remisie bajtowo.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Opis relacji, którą specyfikacja może dołączyć (LEFT JOIN) do encji głównej.
#[derive(Debug, PartialEq, Eq)]
pub struct Relation {
    pub name: &'static str,
    pub table: &'static str,
    pub alias: &'static str,
    pub foreign_key: &'static str,
    pub columns: &'static [&'static str],
}

impl Relation {
    /// Nazwa kolumny w wyniku zapytania, np. `pb_name`.
    pub fn projection(&self, column: &str) -> String {
        format!("{}_{}", self.alias, column)
    }
}

/// Encja, którą potrafi obsłużyć generyczne repozytorium.
pub trait Entity:
    Debug + Clone + Send + Sync + Unpin + for<'r> FromRow<'r, PgRow> + 'static
{
    const TABLE: &'static str;
    const ID_COLUMN: &'static str = "id";
    const RELATIONS: &'static [&'static Relation] = &[];

    fn id(&self) -> i32;

    /// Wartość kolumny do oceny kryteriów poza bazą danych.
    fn field(&self, column: &str) -> Option<FieldValue>;

    /// Usuwa relacje, których specyfikacja nie dołączyła.
    fn retain_relations(&mut self, _included: &[&'static Relation]) {}
}

/// Odczytuje kolumnę dołączonej relacji. Brak kolumny (relacja niedołączona) daje `None`.
pub fn try_get_joined<'r, T>(
    row: &'r PgRow,
    relation: &Relation,
    column: &str,
) -> Result<Option<T>, sqlx::Error>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    let projection = relation.projection(column);
    match row.try_get::<Option<T>, _>(projection.as_str()) {
        Ok(value) => Ok(value),
        Err(sqlx::Error::ColumnNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn is_included(included: &[&'static Relation], relation: &Relation) -> bool {
    included.iter().any(|r| r.name == relation.name)
}
