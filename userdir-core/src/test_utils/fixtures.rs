//! Shared test fixtures

use crate::domain::User;

/// Canonical first sample user.
pub fn ivan() -> User {
    User::new(1, "Ivan", "123")
}

/// Canonical second sample user.
pub fn petr() -> User {
    User::new(2, "Petr", "111")
}
