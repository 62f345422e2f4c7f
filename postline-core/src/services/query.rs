//! Query service - read-only access to stored entities

use std::sync::Arc;

use tracing::debug;

use crate::domain::result::Result;
use crate::domain::{Entity, EntityId, Message, User};
use crate::ports::Repository;

/// Read-only use cases for one entity kind
///
/// No validation happens here: each call is a single repository read whose
/// result is returned as-is, and storage failures are propagated.
pub struct QueryService<E: Entity> {
    repository: Arc<dyn Repository<E>>,
}

/// List and look up chat messages
pub type MessageQueryService = QueryService<Message>;

/// List and look up users
pub type UserQueryService = QueryService<User>;

impl<E: Entity> QueryService<E> {
    pub fn new(repository: Arc<dyn Repository<E>>) -> Self {
        Self { repository }
    }

    /// All entities in insertion order
    pub async fn list(&self) -> Result<Vec<E>> {
        let entities = self.repository.list().await?;
        debug!(kind = E::KIND, count = entities.len(), "Listed");
        Ok(entities)
    }

    /// Look up one entity; `Ok(None)` when no entity has this id
    pub async fn find(&self, id: &EntityId) -> Result<Option<E>> {
        let entity = self.repository.find_by_id(id).await?;
        debug!(kind = E::KIND, %id, found = entity.is_some(), "Looked up");
        Ok(entity)
    }
}
