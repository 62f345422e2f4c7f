//! Create user use case

use std::sync::Arc;

use tracing::debug;

use crate::domain::result::Result;
use crate::domain::{Entity, User};
use crate::ports::{Clock, IdGenerator, Repository};

use super::save_if_valid;

/// Registers a new user after checking the email address
pub struct CreateUserService {
    repository: Arc<dyn Repository<User>>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl CreateUserService {
    pub fn new(
        repository: Arc<dyn Repository<User>>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            clock,
            ids,
        }
    }

    /// Create a user; an invalid email is rejected before anything is stored
    pub async fn execute(&self, name: &str, email: &str) -> Result<User> {
        let user = User::new(self.ids.next_id(), name, email, self.clock.now());
        debug!(id = %user.id(), "create_user called");
        save_if_valid(self.repository.as_ref(), user).await
    }
}
