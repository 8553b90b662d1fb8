//! In-memory user directory.

use std::sync::{Mutex, PoisonError};

use crate::domain::ports::UserDirectory;
use crate::domain::user::{User, UserId, UserValidationError};

#[derive(Debug, Default)]
struct Users {
    last_id: u32,
    users: Vec<User>,
}

/// Users held for the process lifetime; ids are sequential from 1.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    inner: Mutex<Users>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn get_user(&self, id: UserId) -> Option<User> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.users.iter().find(|user| user.id() == id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner
            .users
            .iter()
            .find(|user| user.username() == username)
            .cloned()
    }

    fn create_user(&self, username: &str) -> Result<User, UserValidationError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = UserId::new(inner.last_id.saturating_add(1))?;
        let user = User::new(id, username)?;
        inner.last_id = id.get();
        inner.users.push(user.clone());
        Ok(user)
    }
}
