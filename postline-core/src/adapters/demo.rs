//! Demo conversation for trying Postline without typing messages
//!
//! The seed is fed through the send-message use case, so every demo
//! message is validated and stored like any other.

/// Sample users as `(name, email)`
pub const DEMO_USERS: &[(&str, &str)] = &[
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
];

/// Sample conversation as `(sender, content)` in send order
pub const DEMO_CONVERSATION: &[(&str, &str)] = &[
    ("Alice", "Hi Bob, did you read the architecture notes?"),
    ("Bob", "Yes. Entities at the center, frameworks at the edge."),
    ("Alice", "And the use cases only know the repository trait."),
    ("Bob", "So swapping the JSON store for memory is one line in the wiring."),
    ("Alice", "Exactly. The presenter handles the time formatting."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_data_is_nonblank() {
        assert!(!DEMO_CONVERSATION.is_empty());
        for (sender, content) in DEMO_CONVERSATION {
            assert!(!sender.trim().is_empty());
            assert!(!content.trim().is_empty());
        }
        for (_, email) in DEMO_USERS {
            assert!(email.contains('@'));
        }
    }
}
