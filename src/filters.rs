// src/filters.rs
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use validator::Validate;

const DEFAULT_PAGE_INDEX: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 6;
const MAX_PAGE_SIZE: i64 = 50;
const MAX_PAGE_INDEX: i64 = 1_000_000;

/// Klucz sortowania listy produktów. Nieznana wartość oznacza sortowanie po nazwie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ProductSort {
    #[default]
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "priceAsc")]
    PriceAsc,
    #[strum(serialize = "priceDesc")]
    PriceDesc,
}

// Puste `brandId=` traktujemy jak brak parametru.
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecParams {
    // Filtry
    #[serde(default, deserialize_with = "empty_string_as_none")]
    brand_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    type_id: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 100, message = "Fraza wyszukiwania może mieć najwyżej 100 znaków"))]
    search: Option<String>,

    // Sortowanie
    #[serde(default)]
    sort: Option<String>,

    // Paginacja
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(
        min = 1,
        max = 1_000_000,
        message = "Numer strony musi być z zakresu 1..=1000000"
    ))]
    page_index: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, message = "Rozmiar strony musi być większy od zera"))]
    page_size: Option<i64>,
}

impl ProductSpecParams {
    pub fn brand_id(&self) -> Option<i32> {
        self.brand_id
    }

    pub fn type_id(&self) -> Option<i32> {
        self.type_id
    }

    /// Fraza po przycięciu i zamianie na małe litery; pusta fraza to brak filtra.
    pub fn search(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn sort(&self) -> ProductSort {
        self.sort
            .as_deref()
            .and_then(|s| ProductSort::from_str(s.trim()).ok())
            .unwrap_or_default()
    }

    pub fn page_index(&self) -> i64 {
        self.page_index.unwrap_or(DEFAULT_PAGE_INDEX).max(1)
    }

    pub fn page_size(&self) -> i64 {
        match self.page_size {
            Some(size) if size > 0 && size <= MAX_PAGE_SIZE => size,
            Some(size) if size > MAX_PAGE_SIZE => MAX_PAGE_SIZE,
            Some(_) | None => DEFAULT_PAGE_SIZE,
        }
    }

    /// Liczba pomijanych pozycji dla bieżącej strony.
    pub fn skip(&self) -> i64 {
        self.page_size()
            .saturating_mul(self.page_index().min(MAX_PAGE_INDEX) - 1)
    }
}
