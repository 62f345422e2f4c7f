//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory storage for the Repository port
//! - JSON documents on local disk for the Repository port
//! - System clock and UUIDs for the Clock / IdGenerator ports
//! - Demo seed data

pub mod demo;
pub mod json_file;
pub mod memory;
pub mod system;

#[cfg(test)]
pub mod spy;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use system::{FixedClock, SequentialIdGenerator, SystemClock, UuidGenerator};
