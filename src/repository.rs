// src/repository.rs
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::marker::PhantomData;

use crate::entity::{Entity, FieldValue};
use crate::specification::{Criterion, Specification};

pub type RepositoryResult<T> = Result<T, sqlx::Error>;

/// Odczyt encji jednego typu według specyfikacji.
#[async_trait]
pub trait GenericRepository<E: Entity>: Send + Sync {
    /// `None`, gdy encja nie istnieje. O odpowiedzi HTTP decyduje wywołujący.
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<E>>;

    async fn list_all(&self) -> RepositoryResult<Vec<E>>;

    /// Kryteria, relacje, sortowanie i paginacja ze specyfikacji.
    async fn list(&self, spec: &Specification<E>) -> RepositoryResult<Vec<E>>;

    /// Kryteria i relacje; co najwyżej jeden wynik.
    async fn get_entity_with_spec(&self, spec: &Specification<E>) -> RepositoryResult<Option<E>>;

    /// Liczba encji spełniających kryteria. Sortowanie i paginacja są pomijane.
    async fn count(&self, spec: &Specification<E>) -> RepositoryResult<i64>;
}

/// Repozytorium PostgreSQL. Cała specyfikacja jest tłumaczona na jedno zapytanie SQL.
pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        PgRepository {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        PgRepository {
            pool,
            _entity: PhantomData,
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &FieldValue) {
    match value {
        FieldValue::Int(v) => builder.push_bind(*v),
        FieldValue::Text(v) => builder.push_bind(v.clone()),
        FieldValue::Decimal(v) => builder.push_bind(*v),
    };
}

/// Znaki specjalne LIKE w szukanej frazie traktujemy dosłownie.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_criteria<E: Entity>(builder: &mut QueryBuilder<'static, Postgres>, criteria: &[Criterion]) {
    for (index, criterion) in criteria.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        match criterion {
            Criterion::Equals { column, value } => {
                builder.push(format_args!("{}.{} = ", E::TABLE, column));
                push_value(builder, value);
            }
            Criterion::ContainsIgnoreCase { columns, term } => {
                if columns.is_empty() {
                    builder.push("FALSE");
                    continue;
                }
                let like_pattern = format!("%{}%", escape_like(term));
                builder.push("(");
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        builder.push(" OR ");
                    }
                    builder
                        .push(format_args!("{}.{} ILIKE ", E::TABLE, column))
                        .push_bind(like_pattern.clone());
                }
                builder.push(")");
            }
        }
    }
}

/// SELECT z dołączonymi relacjami i kryteriami, bez sortowania i paginacji.
pub(crate) fn select_query<E: Entity>(spec: &Specification<E>) -> QueryBuilder<'static, Postgres> {
    let mut query_builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {}.*", E::TABLE));

    for relation in spec.includes() {
        for column in relation.columns {
            query_builder.push(format_args!(
                ", {}.{} AS {}",
                relation.alias,
                column,
                relation.projection(column)
            ));
        }
    }
    query_builder.push(format_args!(" FROM {}", E::TABLE));
    for relation in spec.includes() {
        query_builder.push(format_args!(
            " LEFT JOIN {} {} ON {}.id = {}.{}",
            relation.table,
            relation.alias,
            relation.alias,
            E::TABLE,
            relation.foreign_key
        ));
    }

    push_criteria::<E>(&mut query_builder, spec.criteria());
    query_builder
}

pub(crate) fn list_query<E: Entity>(spec: &Specification<E>) -> QueryBuilder<'static, Postgres> {
    let mut query_builder = select_query(spec);

    match spec.ordering() {
        Some(order) => query_builder.push(format_args!(
            " ORDER BY {table}.{} {}, {table}.{} ASC",
            order.column,
            order.direction.as_sql(),
            E::ID_COLUMN,
            table = E::TABLE
        )),
        None => query_builder.push(format_args!(" ORDER BY {}.{} ASC", E::TABLE, E::ID_COLUMN)),
    };

    if let Some(paging) = spec.paging() {
        query_builder.push(" LIMIT ").push_bind(paging.take);
        query_builder.push(" OFFSET ").push_bind(paging.skip);
    }
    query_builder
}

/// Pojedyncza encja: przy wielu trafieniach wygrywa najmniejszy identyfikator.
pub(crate) fn single_query<E: Entity>(spec: &Specification<E>) -> QueryBuilder<'static, Postgres> {
    let mut query_builder = select_query(spec);
    query_builder.push(format_args!(
        " ORDER BY {}.{} ASC LIMIT 1",
        E::TABLE,
        E::ID_COLUMN
    ));
    query_builder
}

pub(crate) fn count_query<E: Entity>(spec: &Specification<E>) -> QueryBuilder<'static, Postgres> {
    let mut query_builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", E::TABLE));
    push_criteria::<E>(&mut query_builder, spec.criteria());
    query_builder
}

#[async_trait]
impl<E: Entity> GenericRepository<E> for PgRepository<E> {
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<E>> {
        self.get_entity_with_spec(&Specification::with_id(id)).await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<E>> {
        self.list(&Specification::new()).await
    }

    async fn list(&self, spec: &Specification<E>) -> RepositoryResult<Vec<E>> {
        let mut query_builder = list_query(spec);
        tracing::debug!(table = E::TABLE, sql = query_builder.sql(), "Lista encji");

        query_builder
            .build_query_as::<E>()
            .fetch_all(&self.pool)
            .await
    }

    async fn get_entity_with_spec(&self, spec: &Specification<E>) -> RepositoryResult<Option<E>> {
        let mut query_builder = single_query(spec);
        tracing::debug!(table = E::TABLE, sql = query_builder.sql(), "Pojedyncza encja");

        query_builder
            .build_query_as::<E>()
            .fetch_optional(&self.pool)
            .await
    }

    async fn count(&self, spec: &Specification<E>) -> RepositoryResult<i64> {
        let mut query_builder = count_query(spec);
        tracing::debug!(table = E::TABLE, sql = query_builder.sql(), "Liczba encji");

        query_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
    }
}
