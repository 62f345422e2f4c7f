//! Status service - conversation summary

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{Message, User};
use crate::ports::Repository;

/// Status service for store summaries
pub struct StatusService {
    messages: Arc<dyn Repository<Message>>,
    users: Arc<dyn Repository<User>>,
}

impl StatusService {
    pub fn new(messages: Arc<dyn Repository<Message>>, users: Arc<dyn Repository<User>>) -> Self {
        Self { messages, users }
    }

    /// Get overall status summary
    pub async fn get_status(&self) -> Result<StatusSummary> {
        let messages = self.messages.list().await?;
        let users = self.users.list().await?;

        let mut senders: Vec<String> = Vec::new();
        for message in &messages {
            if !senders.iter().any(|s| s == message.sender()) {
                senders.push(message.sender().to_string());
            }
        }

        let earliest = messages.iter().map(|m| m.created_at()).min();
        let latest = messages.iter().map(|m| m.created_at()).max();

        Ok(StatusSummary {
            total_messages: messages.len() as i64,
            total_users: users.len() as i64,
            senders,
            date_range: DateRange {
                earliest: earliest.map(|t| t.to_rfc3339()),
                latest: latest.map(|t| t.to_rfc3339()),
            },
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_messages: i64,
    pub total_users: i64,
    /// Distinct senders in order of first message
    pub senders: Vec<String>,
    pub date_range: DateRange,
}

#[derive(Debug, Serialize)]
pub struct DateRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRepository;
    use crate::domain::EntityId;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_status_summary() {
        let messages = Arc::new(InMemoryRepository::new());
        let users: Arc<InMemoryRepository<User>> = Arc::new(InMemoryRepository::new());

        for (i, (sender, hour)) in [("Alice", 9), ("Bob", 11), ("Alice", 10)].iter().enumerate() {
            let at = Utc.with_ymd_and_hms(2024, 6, 1, *hour, 0, 0).unwrap();
            let id = EntityId::new(format!("m{i}")).unwrap();
            messages.save(Message::new(id, "hi", *sender, at)).await.unwrap();
        }

        let svc = StatusService::new(messages, users);
        let status = svc.get_status().await.unwrap();

        assert_eq!(status.total_messages, 3);
        assert_eq!(status.total_users, 0);
        assert_eq!(status.senders, vec!["Alice", "Bob"]);
        assert_eq!(status.date_range.earliest.as_deref(), Some("2024-06-01T09:00:00+00:00"));
        assert_eq!(status.date_range.latest.as_deref(), Some("2024-06-01T11:00:00+00:00"));
    }

    #[tokio::test]
    async fn test_empty_status() {
        let svc = StatusService::new(
            Arc::new(InMemoryRepository::<Message>::new()),
            Arc::new(InMemoryRepository::<User>::new()),
        );
        let status = svc.get_status().await.unwrap();
        assert_eq!(status.total_messages, 0);
        assert!(status.senders.is_empty());
        assert!(status.date_range.earliest.is_none());
    }
}
