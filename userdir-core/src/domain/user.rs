//! User domain model

use serde::{Deserialize, Serialize};

/// A user record held by the directory.
///
/// Ids are assigned by the caller; the store itself enforces no
/// uniqueness, so duplicate ids only surface when an id-indexed view
/// is built.
///
/// The password is stored and compared in plaintext. This mirrors the
/// system being modeled and is a known weak practice - callers must
/// not treat this crate as an authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(id: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(1, "Ivan", "123");
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Ivan");
        assert_eq!(user.password, "123");
    }

    #[test]
    fn test_user_serializes_all_fields() {
        let user = User::new(2, "Petr", "111");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["username"], "Petr");
        assert_eq!(json["password"], "111");
    }
}
