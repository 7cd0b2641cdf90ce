//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

mod directory;

pub use directory::DirectoryService;
