//! Test utilities
//!
//! Manual mock implementations, shared fixtures, and suite lifecycle
//! helpers for unit and integration testing. Mocks are written by hand
//! rather than generated: the dao port is one method, and a hand-rolled
//! decorator is easier to read and debug than macro output.

pub mod fixtures;
pub mod mocks;
pub mod suite;

pub use fixtures::*;
pub use mocks::*;
