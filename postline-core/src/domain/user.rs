//! User domain model

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};

/// One `@`, at least one `.` after it, no whitespace anywhere
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: EntityId,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn invalid_fields(&self) -> Vec<&'static str> {
        if EMAIL_RE.is_match(&self.email) {
            Vec::new()
        } else {
            vec!["email"]
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_email(email: &str) -> User {
        User::new(EntityId::new("user-123").unwrap(), "Test", email, Utc::now())
    }

    #[test]
    fn test_user_creation() {
        let user = user_with_email("test@example.com");
        assert_eq!(user.id().as_str(), "user-123");
        assert_eq!(user.name(), "Test");
        assert_eq!(user.email(), "test@example.com");
    }

    #[test]
    fn test_email_validation() {
        assert!(user_with_email("test@example.com").is_valid());
        assert!(user_with_email("a.b@mail.example.org").is_valid());

        for bad in ["", "test", "test@example", "a@b@c.com", "te st@example.com", "@example.com", "test@.com."] {
            assert_eq!(user_with_email(bad).invalid_fields(), vec!["email"], "{bad:?}");
        }
    }
}
