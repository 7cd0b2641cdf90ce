//! Userdir Core - in-memory user directory
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, UserStore) and the error type
//! - **ports**: Trait definitions for external dependencies (UserDao)
//! - **services**: Business logic orchestration (DirectoryService)
//! - **adapters**: Concrete implementations (the stub dao)
//!
//! The directory is deliberately naive: passwords live in plaintext and
//! deletion is delegated to an external system of record without
//! touching the in-memory sequence. Both properties are part of the
//! modeled contract, not oversights to patch.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod test_utils;

use std::sync::Arc;

use adapters::StubUserDao;
use services::DirectoryService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{User, UserStore};
pub use ports::UserDao;

/// Build a directory wired to the stub persistence collaborator.
///
/// Callers with a real (or canned) collaborator use
/// [`DirectoryService::new`] directly.
pub fn directory_with_stub() -> DirectoryService {
    DirectoryService::new(Arc::new(StubUserDao::new()))
}
