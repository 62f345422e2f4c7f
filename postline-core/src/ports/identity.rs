//! Identity and time ports used when use cases create entities

use chrono::{DateTime, Utc};

use crate::domain::EntityId;

/// Source of "now" for entity timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh entity identifiers
///
/// Implementations must never return the same id twice within a process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> EntityId;
}
