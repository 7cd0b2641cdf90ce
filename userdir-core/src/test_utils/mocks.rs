//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for
//! testing. They store state in memory and allow tests to verify
//! behavior.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::Result;

use crate::ports::UserDao;

// ============================================================================
// Spy Dao (decorator with canned answers)
// ============================================================================

/// Decorator over a real [`UserDao`] with per-id canned answers.
///
/// When a canned answer is registered for the requested id it is
/// returned; otherwise the call is forwarded to the inner dao. No
/// inheritance involved - plain composition through the port trait.
pub struct SpyUserDao {
    inner: Arc<dyn UserDao>,
    answers: RwLock<HashMap<i32, bool>>,
}

impl SpyUserDao {
    pub fn new(inner: Arc<dyn UserDao>) -> Self {
        Self {
            inner,
            answers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a canned answer for a user id.
    pub fn set_answer(&self, user_id: i32, answer: bool) {
        self.answers.write().unwrap().insert(user_id, answer);
    }

    /// Builder-style variant of [`set_answer`](Self::set_answer).
    pub fn with_answer(self, user_id: i32, answer: bool) -> Self {
        self.set_answer(user_id, answer);
        self
    }
}

impl UserDao for SpyUserDao {
    fn delete(&self, user_id: i32) -> Result<bool> {
        if let Some(answer) = self.answers.read().unwrap().get(&user_id) {
            return Ok(*answer);
        }
        self.inner.delete(user_id)
    }
}

// ============================================================================
// Counting Dao (interaction recording)
// ============================================================================

/// Records every delete call and answers with a fixed result.
#[derive(Default)]
pub struct CountingUserDao {
    result: bool,
    deleted_ids: RwLock<Vec<i32>>,
}

impl CountingUserDao {
    /// Create a counting dao that answers every delete with `result`.
    pub fn returning(result: bool) -> Self {
        Self {
            result,
            deleted_ids: RwLock::new(Vec::new()),
        }
    }

    /// Ids passed to `delete`, in call order.
    pub fn deleted_ids(&self) -> Vec<i32> {
        self.deleted_ids.read().unwrap().clone()
    }

    pub fn delete_count(&self) -> usize {
        self.deleted_ids.read().unwrap().len()
    }
}

impl UserDao for CountingUserDao {
    fn delete(&self, user_id: i32) -> Result<bool> {
        self.deleted_ids.write().unwrap().push(user_id);
        Ok(self.result)
    }
}

// ============================================================================
// Failing Dao (collaborator-side errors)
// ============================================================================

/// Fails every delete with the configured message, untranslated.
pub struct FailingUserDao {
    message: String,
}

impl FailingUserDao {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl UserDao for FailingUserDao {
    fn delete(&self, _user_id: i32) -> Result<bool> {
        Err(anyhow::anyhow!("{}", self.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StubUserDao;

    #[test]
    fn test_spy_prefers_canned_answer() {
        let spy = SpyUserDao::new(Arc::new(StubUserDao::new())).with_answer(1, false);
        assert!(!spy.delete(1).unwrap());
    }

    #[test]
    fn test_spy_falls_back_to_inner_dao() {
        // stub always answers true
        let spy = SpyUserDao::new(Arc::new(StubUserDao::new())).with_answer(1, false);
        assert!(spy.delete(2).unwrap());
    }

    #[test]
    fn test_counting_dao_records_call_order() {
        let dao = CountingUserDao::returning(true);
        dao.delete(3).unwrap();
        dao.delete(1).unwrap();
        assert_eq!(dao.deleted_ids(), vec![3, 1]);
        assert_eq!(dao.delete_count(), 2);
    }

    #[test]
    fn test_failing_dao_propagates_message() {
        let dao = FailingUserDao::new("connection refused");
        let err = dao.delete(1).unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }
}
