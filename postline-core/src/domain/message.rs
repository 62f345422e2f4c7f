//! Message domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};

/// A chat message sent by a named sender
///
/// Content and sender are stored exactly as supplied; surrounding
/// whitespace only matters for validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    id: EntityId,
    content: String,
    sender: String,
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: EntityId,
        content: impl Into<String>,
        sender: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            sender: sender.into(),
            created_at,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Message {
    const KIND: &'static str = "message";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn invalid_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.content.trim().is_empty() {
            fields.push("content");
        }
        if self.sender.trim().is_empty() {
            fields.push("sender");
        }
        fields
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Message {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn message(content: &str, sender: &str) -> Message {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        Message::new(EntityId::new("msg-1").unwrap(), content, sender, at)
    }

    #[test]
    fn test_message_validation() {
        assert!(message("hello", "Alice").is_valid());
        assert_eq!(message("   ", "Alice").invalid_fields(), vec!["content"]);
        assert_eq!(message("hi", "\t").invalid_fields(), vec!["sender"]);
        assert_eq!(message("", " ").invalid_fields(), vec!["content", "sender"]);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let msg = message("  padded  ", "Bob");
        let first = msg.is_valid();
        for _ in 0..10 {
            assert_eq!(msg.is_valid(), first);
        }
        assert_eq!(msg.content(), "  padded  ");
    }

    #[test]
    fn test_equality_by_id() {
        let a = message("hello", "Alice");
        let b = message("different", "Bob");
        assert_eq!(a, b);

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let c = Message::new(EntityId::new("msg-2").unwrap(), "hello", "Alice", at);
        assert_ne!(a, c);
    }
}
