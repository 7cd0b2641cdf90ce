//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies.
//! The only adapter here is a stub: the system of record is emulated,
//! not real (no persistence is in scope).

mod stub_dao;

pub use stub_dao::StubUserDao;
