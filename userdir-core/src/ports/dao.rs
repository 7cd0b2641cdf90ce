//! Persistence port - external system-of-record abstraction

use anyhow::Result;

/// Persistence collaborator for user deletion.
///
/// The directory treats this as an opaque external system of record:
/// deleting through it does NOT touch the directory's in-memory
/// sequence. Calls are synchronous and are never retried; whatever an
/// implementation returns - the boolean or its own error - is handed
/// back to the caller untranslated.
pub trait UserDao: Send + Sync {
    /// Delete the user with the given id from the external store.
    ///
    /// Returns the collaborator's own success flag.
    fn delete(&self, user_id: i32) -> Result<bool>;
}
