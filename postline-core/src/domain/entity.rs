//! Entity abstraction shared by every domain record

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque, non-empty entity identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

/// Returned when an identifier would be empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entity id cannot be empty")]
pub struct InvalidId;

impl EntityId {
    /// Wrap a raw identifier, rejecting empty or whitespace-only values
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidId);
        }
        Ok(Self(raw))
    }

    /// Build an id from a counter value; the digits keep it non-empty
    pub(crate) fn sequential(prefix: &str, n: u64) -> Self {
        Self(format!("{prefix}{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for EntityId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl TryFrom<String> for EntityId {
    type Error = InvalidId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A domain record with a stable identity and a self-contained validity check
///
/// Entities are immutable once constructed. `invalid_fields` must be pure:
/// the same field values always produce the same answer, and nothing is
/// read from outside the entity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Short lowercase name of the entity kind ("message", "user")
    const KIND: &'static str;

    fn id(&self) -> &EntityId;

    /// Names of the fields that fail validation, empty when the entity is valid
    fn invalid_fields(&self) -> Vec<&'static str>;

    fn is_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_rejects_blank() {
        assert_eq!(EntityId::new(""), Err(InvalidId));
        assert_eq!(EntityId::new("   "), Err(InvalidId));
        assert_eq!(EntityId::new("msg-1").unwrap().as_str(), "msg-1");
    }

    #[test]
    fn test_entity_id_serde() {
        let id: EntityId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.to_string(), "abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");

        let blank = serde_json::from_str::<EntityId>("\"\"");
        assert!(blank.is_err());
    }
}
