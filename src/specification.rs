// src/specification.rs
//
// Deklaratywny opis zapytania: kryteria, dołączane relacje, sortowanie i paginacja.
// Sama specyfikacja niczego nie wykonuje, robi to repozytorium.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::entity::{Entity, FieldValue, Relation};

#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Equals {
        column: &'static str,
        value: FieldValue,
    },
    /// Dopasowanie podciągu bez względu na wielkość liter w dowolnej z kolumn.
    ContainsIgnoreCase {
        columns: &'static [&'static str],
        term: String,
    },
}

impl Criterion {
    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        match self {
            Criterion::Equals { column, value } => entity.field(column).as_ref() == Some(value),
            Criterion::ContainsIgnoreCase { columns, term } => {
                let term = term.to_lowercase();
                columns.iter().any(|column| {
                    entity
                        .field(column)
                        .as_ref()
                        .and_then(FieldValue::as_text)
                        .is_some_and(|text| text.to_lowercase().contains(&term))
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub skip: i64,
    pub take: i64,
}

#[derive(Debug, Clone)]
pub struct Specification<E> {
    criteria: Vec<Criterion>,
    includes: Vec<&'static Relation>,
    order_by: Option<OrderBy>,
    paging: Option<Paging>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Default for Specification<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Specification<E> {
    /// Specyfikacja dopasowująca wszystkie encje.
    pub fn new() -> Self {
        Specification {
            criteria: Vec::new(),
            includes: Vec::new(),
            order_by: None,
            paging: None,
            _entity: PhantomData,
        }
    }

    pub fn with_id(id: i32) -> Self {
        Self::new().where_equals(E::ID_COLUMN, FieldValue::Int(id))
    }

    pub fn and(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn where_equals(self, column: &'static str, value: FieldValue) -> Self {
        self.and(Criterion::Equals { column, value })
    }

    pub fn where_contains(self, columns: &'static [&'static str], term: impl Into<String>) -> Self {
        self.and(Criterion::ContainsIgnoreCase {
            columns,
            term: term.into(),
        })
    }

    pub fn include(mut self, relation: &'static Relation) -> Self {
        debug_assert!(
            E::RELATIONS.iter().any(|r| r.name == relation.name),
            "relacja {} nie należy do {}",
            relation.name,
            E::TABLE
        );
        if !self.includes.iter().any(|r| r.name == relation.name) {
            self.includes.push(relation);
        }
        self
    }

    pub fn order_by(mut self, column: &'static str) -> Self {
        self.order_by = Some(OrderBy {
            column,
            direction: SortDirection::Ascending,
        });
        self
    }

    pub fn order_by_descending(mut self, column: &'static str) -> Self {
        self.order_by = Some(OrderBy {
            column,
            direction: SortDirection::Descending,
        });
        self
    }

    pub fn apply_paging(mut self, skip: i64, take: i64) -> Self {
        self.paging = Some(Paging {
            skip: skip.max(0),
            take: take.max(0),
        });
        self
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn includes(&self) -> &[&'static Relation] {
        &self.includes
    }

    pub fn ordering(&self) -> Option<OrderBy> {
        self.order_by
    }

    pub fn paging(&self) -> Option<Paging> {
        self.paging
    }

    pub fn matches(&self, entity: &E) -> bool {
        self.criteria.iter().all(|criterion| criterion.matches(entity))
    }

    /// Kolejność wyników: kolumna sortowania, a przy remisie identyfikator rosnąco.
    pub fn compare(&self, a: &E, b: &E) -> Ordering {
        let primary = match self.order_by {
            Some(OrderBy { column, direction }) => {
                let ordering = match (a.field(column), b.field(column)) {
                    (Some(left), Some(right)) => left.compare(&right),
                    _ => Ordering::Equal,
                };
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
            None => Ordering::Equal,
        };
        primary.then_with(|| a.id().cmp(&b.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, ProductBrand};
    use rust_decimal::Decimal;

    fn product(id: i32, name: &str, description: &str, price: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            picture_url: String::new(),
            price: Decimal::new(price, 0),
            product_brand_id: 1,
            product_type_id: 1,
            product_brand: None,
            product_type: None,
        }
    }

    #[test]
    fn empty_specification_matches_everything() {
        let spec = Specification::<ProductBrand>::new();
        let brand = ProductBrand {
            id: 1,
            name: "React".to_string(),
        };
        assert!(spec.matches(&brand));
        assert!(spec.paging().is_none());
        assert!(spec.includes().is_empty());
    }

    #[test]
    fn with_id_filters_on_identifier() {
        let spec = Specification::<Product>::with_id(3);
        assert!(spec.matches(&product(3, "Boots", "", 10)));
        assert!(!spec.matches(&product(4, "Boots", "", 10)));
    }

    #[test]
    fn contains_ignores_case_across_columns() {
        let spec = Specification::<Product>::new().where_contains(&["name", "description"], "GLOVE");
        assert!(spec.matches(&product(1, "Red Glove", "", 10)));
        assert!(spec.matches(&product(2, "Mitten", "a woolly glove", 10)));
        assert!(!spec.matches(&product(3, "Boots", "leather", 10)));
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let spec = Specification::<Product>::new()
            .where_equals("product_brand_id", FieldValue::Int(1))
            .where_contains(&["name"], "hat");
        assert!(spec.matches(&product(1, "Hat", "", 10)));

        let mut other_brand = product(2, "Hat", "", 10);
        other_brand.product_brand_id = 2;
        assert!(!spec.matches(&other_brand));
    }

    #[test]
    fn includes_are_deduplicated_and_keep_order() {
        let spec = Specification::<Product>::new()
            .include(&Product::TYPE)
            .include(&Product::BRAND)
            .include(&Product::TYPE);
        let names: Vec<&str> = spec.includes().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["product_type", "product_brand"]);
    }

    #[test]
    fn compare_uses_id_as_tie_breaker() {
        let spec = Specification::<Product>::new().order_by_descending("price");
        let cheap = product(1, "A", "", 10);
        let expensive = product(2, "B", "", 20);
        let expensive_twin = product(3, "C", "", 20);

        assert_eq!(spec.compare(&expensive, &cheap), Ordering::Less);
        assert_eq!(spec.compare(&expensive, &expensive_twin), Ordering::Less);
    }

    #[test]
    fn negative_paging_is_clamped() {
        let spec = Specification::<Product>::new().apply_paging(-5, 10);
        assert_eq!(spec.paging(), Some(Paging { skip: 0, take: 10 }));
    }
}
