//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and return it with its assigned id.
    ///
    /// A duplicate username or email must fail with
    /// [`AuthError::UserAlreadyExists`](crate::error::AuthError::UserAlreadyExists),
    /// even when a prior existence check passed.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find an active user by exact user name
    async fn find_active_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>>;

    /// Check, in one query, whether the user name or the email is taken
    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<bool>;
}
