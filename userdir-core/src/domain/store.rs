//! In-memory user store

use crate::domain::User;

/// Growable ordered sequence of [`User`] records.
///
/// Insertion order is preserved and nothing is deduplicated - two
/// records with the same id can coexist here. Ensuring unique ids is
/// the caller's job (see `DirectoryService::users_by_id`).
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one or more users, preserving call order.
    pub fn add<I>(&mut self, users: I)
    where
        I: IntoIterator<Item = User>,
    {
        self.users.extend(users);
    }

    /// All stored users in insertion order. Empty if nothing was added.
    pub fn get_all(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = UserStore::new();
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = UserStore::new();
        store.add([User::new(1, "Ivan", "123")]);
        store.add([User::new(2, "Petr", "111"), User::new(3, "Olga", "222")]);

        let all = store.get_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].username, "Ivan");
        assert_eq!(all[1].username, "Petr");
        assert_eq!(all[2].username, "Olga");
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut store = UserStore::new();
        let ivan = User::new(1, "Ivan", "123");
        store.add([ivan.clone(), ivan]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_all_is_idempotent() {
        let mut store = UserStore::new();
        store.add([User::new(1, "Ivan", "123")]);
        assert_eq!(store.get_all().len(), 1);
        assert_eq!(store.get_all().len(), 1);
    }
}
