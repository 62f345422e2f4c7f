//! Service layer - use cases
//!
//! Each service implements one business action (or one read-only feature
//! area) on top of the port traits. Services own all business policy;
//! adapters and presenters own none.

mod create_user;
mod query;
mod send_message;
mod status;

pub use create_user::CreateUserService;
pub use query::{MessageQueryService, QueryService, UserQueryService};
pub use send_message::SendMessageService;
pub use status::{DateRange, StatusService, StatusSummary};

use tracing::{info, warn};

use crate::domain::result::{Error, Result};
use crate::domain::Entity;
use crate::ports::Repository;

/// Validate a freshly built entity and store it with a single `save`
///
/// An invalid entity never reaches the repository. A storage failure is
/// returned as [`Error::Persistence`] with the original cause attached.
async fn save_if_valid<E: Entity>(repository: &dyn Repository<E>, entity: E) -> Result<E> {
    let invalid = entity.invalid_fields();
    if !invalid.is_empty() {
        warn!(kind = E::KIND, fields = ?invalid, "Rejected invalid entity");
        return Err(Error::validation(E::KIND, invalid));
    }

    let id = entity.id().clone();
    if let Err(e) = repository.save(entity.clone()).await {
        warn!(kind = E::KIND, %id, error = %e, "Save failed");
        return Err(e.into());
    }

    info!(kind = E::KIND, %id, "Created");
    Ok(entity)
}
