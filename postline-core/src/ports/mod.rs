//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! and the use cases depend only on these traits, not on concrete
//! implementations.

mod identity;
mod repository;

pub use identity::{Clock, IdGenerator};
pub use repository::{Repository, StorageResult};
