//! Directory service - credential lookup and id-indexed views

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Error, Result, User, UserStore};
use crate::ports::UserDao;

/// Message raised when a credential argument is absent.
const NULL_CREDENTIAL_MSG: &str = "Username or password is null";

/// Directory over an in-memory [`UserStore`] plus an external
/// persistence collaborator.
///
/// All reads and appends run synchronously on the caller's thread.
/// Mutation goes through `&mut self`, so a caller that needs
/// concurrent access wraps the whole service in one lock - the
/// id index is recomputed from the live sequence on every call and
/// must observe completed appends.
pub struct DirectoryService {
    store: UserStore,
    dao: Arc<dyn UserDao>,
}

impl DirectoryService {
    pub fn new(dao: Arc<dyn UserDao>) -> Self {
        Self {
            store: UserStore::new(),
            dao,
        }
    }

    /// Append one or more users to the directory, preserving call order.
    pub fn add<I>(&mut self, users: I)
    where
        I: IntoIterator<Item = User>,
    {
        self.store.add(users);
    }

    /// All users in insertion order.
    pub fn get_all(&self) -> &[User] {
        self.store.get_all()
    }

    /// Look up a user by credentials.
    ///
    /// Credentials are optional because the upstream contract allows
    /// absent values: either being `None` is an invalid-argument
    /// error. Otherwise the sequence is scanned in insertion order and
    /// the first exact, case-sensitive match on both fields wins;
    /// `Ok(None)` means no user matched.
    pub fn login(&self, username: Option<&str>, password: Option<&str>) -> Result<Option<User>> {
        let (username, password) = match (username, password) {
            (Some(u), Some(p)) => (u, p),
            _ => return Err(Error::invalid_argument(NULL_CREDENTIAL_MSG)),
        };

        debug!(username, "login attempt");
        Ok(self
            .store
            .get_all()
            .iter()
            .find(|user| user.username == username && user.password == password)
            .cloned())
    }

    /// Build a fresh id-to-user index from the current sequence.
    ///
    /// Rebuilt on every call; never cached. Two stored users sharing
    /// an id is a caller bug and fails fast with a collision error
    /// rather than silently keeping either record.
    pub fn users_by_id(&self) -> Result<HashMap<i32, User>> {
        let mut index = HashMap::with_capacity(self.store.len());
        for user in self.store.get_all() {
            if index.insert(user.id, user.clone()).is_some() {
                return Err(Error::duplicate_id(user.id));
            }
        }
        Ok(index)
    }

    /// Delete a user through the persistence collaborator.
    ///
    /// Returns the collaborator's boolean (or error) untranslated.
    /// The in-memory sequence is NOT modified: the collaborator is an
    /// external system of record decoupled from this directory, so a
    /// "deleted" user remains visible to [`get_all`](Self::get_all).
    pub fn delete(&self, user_id: i32) -> anyhow::Result<bool> {
        debug!(user_id, "delete forwarded to dao");
        self.dao.delete(user_id)
    }
}
