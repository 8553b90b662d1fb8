//! Port abstraction for the placeholder user directory.

use crate::domain::user::{User, UserId, UserValidationError};

/// Minimal user lookup and creation.
#[cfg_attr(test, mockall::automock)]
pub trait UserDirectory: Send + Sync {
    fn get_user(&self, id: UserId) -> Option<User>;

    /// First user whose username matches exactly.
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Create a user with the next sequential identifier.
    fn create_user(&self, username: &str) -> Result<User, UserValidationError>;
}
