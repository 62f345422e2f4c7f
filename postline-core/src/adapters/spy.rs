//! Spy repository for use case tests
//!
//! Wraps an [`InMemoryRepository`] and counts calls per operation.
//! Can be switched into a failing mode to simulate unavailable storage.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use super::memory::InMemoryRepository;
use crate::domain::result::StorageError;
use crate::domain::{Entity, EntityId};
use crate::ports::{Repository, StorageResult};

pub struct SpyRepository<E> {
    inner: InMemoryRepository<E>,
    fail: AtomicBool,
    pub saves: AtomicUsize,
    pub finds: AtomicUsize,
    pub lists: AtomicUsize,
}

impl<E: Entity> SpyRepository<E> {
    pub fn new() -> Self {
        Self {
            inner: InMemoryRepository::new(),
            fail: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
            finds: AtomicUsize::new(0),
            lists: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        let spy = Self::new();
        spy.fail.store(true, Ordering::SeqCst);
        spy
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn call_count(&self) -> usize {
        self.save_count() + self.finds.load(Ordering::SeqCst) + self.lists.load(Ordering::SeqCst)
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(StorageError::unavailable("spy configured to fail"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for SpyRepository<E> {
    async fn save(&self, entity: E) -> StorageResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.save(entity).await
    }

    async fn find_by_id(&self, id: &EntityId) -> StorageResult<Option<E>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> StorageResult<Vec<E>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.list().await
    }
}
