//! Message presenter

use serde::{Deserialize, Serialize};

use super::TimeDisplay;
use crate::domain::{Entity, Message};

/// Display-ready message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageViewModel {
    pub id: String,
    pub content: String,
    pub sender: String,
    /// RFC 3339 timestamp for machines
    pub created_at: String,
    /// Timestamp formatted for people
    pub display_time: String,
}

/// Projects messages into [`MessageViewModel`]s
#[derive(Debug, Clone, Default)]
pub struct MessagePresenter {
    time: TimeDisplay,
}

impl MessagePresenter {
    pub fn new(time: TimeDisplay) -> Self {
        Self { time }
    }

    pub fn present(&self, message: &Message) -> MessageViewModel {
        MessageViewModel {
            id: message.id().to_string(),
            content: message.content().to_string(),
            sender: message.sender().to_string(),
            created_at: message.created_at().to_rfc3339(),
            display_time: self.time.format(message.created_at()),
        }
    }

    pub fn present_all(&self, messages: &[Message]) -> Vec<MessageViewModel> {
        messages.iter().map(|m| self.present(m)).collect()
    }
}

/// Present a message with the default display settings
pub fn present_message(message: &Message) -> MessageViewModel {
    MessagePresenter::default().present(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityId;
    use chrono::{TimeZone, Utc};

    fn fixed_message() -> Message {
        let at = Utc.with_ymd_and_hms(2023, 11, 5, 14, 7, 0).unwrap();
        Message::new(EntityId::new("msg-7").unwrap(), "hello", "Alice", at)
    }

    #[test]
    fn test_present_message() {
        let msg = fixed_message();
        let vm = present_message(&msg);

        assert_eq!(vm.id, "msg-7");
        assert_eq!(vm.content, msg.content());
        assert_eq!(vm.sender, msg.sender());
        assert_eq!(vm.created_at, "2023-11-05T14:07:00+00:00");
        assert_eq!(vm.display_time, "2023-11-05 14:07");
    }

    #[test]
    fn test_presentation_depends_only_on_timestamp() {
        let presenter = MessagePresenter::new(TimeDisplay::new("%H:%M", -300).unwrap());
        let msg = fixed_message();

        let first = presenter.present(&msg);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = presenter.present(&msg);

        assert_eq!(first, second);
        assert_eq!(first.display_time, "09:07");
    }

    #[test]
    fn test_view_model_serializes() {
        let vm = present_message(&fixed_message());
        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(json["sender"], "Alice");
        assert_eq!(json["display_time"], "2023-11-05 14:07");
    }
}
