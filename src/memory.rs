// src/memory.rs
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entity::Entity;
use crate::repository::{GenericRepository, RepositoryResult};
use crate::specification::Specification;

/// Repozytorium w pamięci (tryb deweloperski i testy). Specyfikacje są oceniane
/// tak samo jak w PostgreSQL: kryteria, relacje, sortowanie z remisem po id, paginacja.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    entities: Arc<RwLock<Vec<E>>>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Encje powinny mieć wypełnione wszystkie relacje; repozytorium usuwa te,
    /// których specyfikacja nie dołączyła.
    pub fn new(entities: Vec<E>) -> Self {
        Self {
            entities: Arc::new(RwLock::new(entities)),
        }
    }

    fn project(entity: &E, spec: &Specification<E>) -> E {
        let mut entity = entity.clone();
        entity.retain_relations(spec.includes());
        entity
    }
}

#[async_trait]
impl<E: Entity> GenericRepository<E> for InMemoryRepository<E> {
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<E>> {
        self.get_entity_with_spec(&Specification::with_id(id)).await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<E>> {
        self.list(&Specification::new()).await
    }

    async fn list(&self, spec: &Specification<E>) -> RepositoryResult<Vec<E>> {
        let entities = self.entities.read().await;

        let mut result: Vec<&E> = entities.iter().filter(|e| spec.matches(e)).collect();
        result.sort_by(|a, b| spec.compare(a, b));

        let page: Vec<E> = match spec.paging() {
            Some(paging) => result
                .into_iter()
                .skip(paging.skip as usize)
                .take(paging.take as usize)
                .map(|e| Self::project(e, spec))
                .collect(),
            None => result.into_iter().map(|e| Self::project(e, spec)).collect(),
        };
        Ok(page)
    }

    async fn get_entity_with_spec(&self, spec: &Specification<E>) -> RepositoryResult<Option<E>> {
        let entities = self.entities.read().await;
        Ok(entities
            .iter()
            .filter(|e| spec.matches(e))
            .min_by_key(|e| e.id())
            .map(|e| Self::project(e, spec)))
    }

    async fn count(&self, spec: &Specification<E>) -> RepositoryResult<i64> {
        let entities = self.entities.read().await;
        Ok(entities.iter().filter(|e| spec.matches(e)).count() as i64)
    }
}
