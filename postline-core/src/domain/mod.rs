//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod entity;
mod message;
mod user;
pub mod result;

pub use entity::{Entity, EntityId, InvalidId};
pub use message::Message;
pub use user::User;
