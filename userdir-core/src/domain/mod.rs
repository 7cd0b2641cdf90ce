//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

pub mod result;
mod store;
mod user;

pub use result::{Error, Result};
pub use store::UserStore;
pub use user::User;
