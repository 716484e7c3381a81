//! In-Memory Repository
//!
//! Backs tests and database-less local runs. Enforces the same uniqueness
//! rules as the PostgreSQL schema.

use std::sync::Mutex;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    users: Vec<User>,
    next_id: i64,
}

/// Vec-backed user store
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> AuthResult<usize> {
        Ok(self.lock()?.users.len())
    }

    pub fn is_empty(&self) -> AuthResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> AuthResult<std::sync::MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| AuthError::Internal("user store lock poisoned".to_string()))
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut state = self.lock()?;

        if state
            .users
            .iter()
            .any(|u| u.user_name == user.user_name || u.email == user.email)
        {
            return Err(AuthError::UserAlreadyExists);
        }

        state.next_id += 1;
        let created = user.clone().into_user(UserId::new(state.next_id));
        state.users.push(created.clone());
        Ok(created)
    }

    async fn find_active_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>> {
        let state = self.lock()?;
        Ok(state
            .users
            .iter()
            .find(|u| u.is_active && u.user_name.as_str() == user_name)
            .cloned())
    }

    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<bool> {
        let state = self.lock()?;
        Ok(state
            .users
            .iter()
            .any(|u| &u.user_name == user_name || &u.email == email))
    }
}
