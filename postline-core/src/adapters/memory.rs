//! In-memory repository implementation
//!
//! Reference implementation of the [`Repository`] port. Nothing survives
//! the process; used for tests, embedding, and the `memory` store backend.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::result::StorageError;
use crate::domain::{Entity, EntityId};
use crate::ports::{Repository, StorageResult};

/// Records in insertion order plus an id -> position index
struct Store<E> {
    records: Vec<E>,
    index: HashMap<EntityId, usize>,
}

impl<E: Entity> Store<E> {
    fn upsert(&mut self, entity: E) -> bool {
        match self.index.get(entity.id()) {
            Some(&pos) => {
                self.records[pos] = entity;
                true
            }
            None => {
                self.index.insert(entity.id().clone(), self.records.len());
                self.records.push(entity);
                false
            }
        }
    }
}

/// Repository keeping entities in process memory
pub struct InMemoryRepository<E> {
    store: RwLock<Store<E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                records: Vec::new(),
                index: HashMap::new(),
            }),
        }
    }

    /// Number of stored entities
    pub fn len(&self) -> StorageResult<usize> {
        let store = self.store.read().map_err(|_| StorageError::Poisoned)?;
        Ok(store.records.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn save(&self, entity: E) -> StorageResult<()> {
        let id = entity.id().clone();
        let mut store = self.store.write().map_err(|_| StorageError::Poisoned)?;
        let replaced = store.upsert(entity);
        debug!(kind = E::KIND, %id, replaced, size = store.records.len(), "Saved");
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> StorageResult<Option<E>> {
        let store = self.store.read().map_err(|_| StorageError::Poisoned)?;
        Ok(store.index.get(id).map(|&pos| store.records[pos].clone()))
    }

    async fn list(&self) -> StorageResult<Vec<E>> {
        let store = self.store.read().map_err(|_| StorageError::Poisoned)?;
        Ok(store.records.clone())
    }
}
