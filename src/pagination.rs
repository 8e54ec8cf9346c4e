// src/pagination.rs
use serde::{Deserialize, Serialize};

/// Koperta strony: `count` to liczba wszystkich pasujących pozycji, nie tylko tej strony.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub page_index: i64,
    pub page_size: i64,
    pub count: i64,
    pub data: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(page_index: i64, page_size: i64, count: i64, data: Vec<T>) -> Self {
        Pagination {
            page_index,
            page_size,
            count,
            data,
        }
    }
}
