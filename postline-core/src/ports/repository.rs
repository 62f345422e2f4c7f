//! Repository port - storage abstraction

use async_trait::async_trait;

use crate::domain::result::StorageError;
use crate::domain::{Entity, EntityId};

/// Result type returned by every repository operation
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-agnostic persistence contract for one entity kind
///
/// Implementations (adapters) provide the actual storage. Every
/// implementation must guarantee:
///
/// - `save` is atomic per call and overwrites an existing entity with the
///   same id in place, so `list` never contains duplicates.
/// - A completed `save` is visible to later `find_by_id`/`list` calls on
///   the same instance.
/// - Returned entities are owned copies; mutating them never touches the
///   stored state.
/// - Storage failures are reported as errors, never as empty results.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Store an entity, replacing any entity with the same id
    async fn save(&self, entity: E) -> StorageResult<()>;

    /// Look up an entity by id; absence is `Ok(None)`
    async fn find_by_id(&self, id: &EntityId) -> StorageResult<Option<E>>;

    /// Snapshot of all entities in insertion order
    async fn list(&self) -> StorageResult<Vec<E>>;
}
