//! Send message use case

use std::sync::Arc;

use tracing::debug;

use crate::domain::result::Result;
use crate::domain::{Entity, Message};
use crate::ports::{Clock, IdGenerator, Repository};

use super::save_if_valid;

/// Creates, validates and stores a new chat message
pub struct SendMessageService {
    repository: Arc<dyn Repository<Message>>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl SendMessageService {
    pub fn new(
        repository: Arc<dyn Repository<Message>>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            clock,
            ids,
        }
    }

    /// Send a message
    ///
    /// The message gets a fresh id and the current time. Content and sender
    /// must both be non-blank after trimming, otherwise a validation error
    /// naming the offending fields is returned and nothing is stored.
    pub async fn execute(&self, content: &str, sender: &str) -> Result<Message> {
        let message = Message::new(self.ids.next_id(), content, sender, self.clock.now());
        debug!(id = %message.id(), "send_message called");
        save_if_valid(self.repository.as_ref(), message).await
    }
}
