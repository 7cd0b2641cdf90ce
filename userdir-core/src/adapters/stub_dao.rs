//! Stub persistence adapter
//!
//! Emulates a database-backed user dao: each delete call acquires a
//! connection, performs no real work, releases the connection, and
//! reports success. The connection is a guard type so release happens
//! on every exit path, including early returns and panics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::ports::UserDao;

/// Stub implementation of the [`UserDao`] port.
///
/// Always answers `Ok(true)`. Tracks how many emulated connections are
/// currently open, which lets tests verify the scoped
/// acquire-then-release behavior.
#[derive(Debug, Default)]
pub struct StubUserDao {
    open_connections: Arc<AtomicUsize>,
}

impl StubUserDao {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emulated connections currently open.
    pub fn open_connections(&self) -> usize {
        self.open_connections.load(Ordering::SeqCst)
    }

    fn open_connection(&self) -> Connection {
        self.open_connections.fetch_add(1, Ordering::SeqCst);
        debug!("stub dao: connection opened");
        Connection {
            gauge: Arc::clone(&self.open_connections),
        }
    }
}

impl UserDao for StubUserDao {
    fn delete(&self, user_id: i32) -> Result<bool> {
        let _connection = self.open_connection();
        debug!(user_id, "stub dao: delete");
        Ok(true)
    }
}

/// Emulated database connection. Closing is the drop.
struct Connection {
    gauge: Arc<AtomicUsize>,
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.gauge.fetch_sub(1, Ordering::SeqCst);
        debug!("stub dao: connection closed");
    }
}
