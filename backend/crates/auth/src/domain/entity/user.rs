//! User Entity

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{UserId, email::Email, user_name::UserName};

/// Persisted user
///
/// Created only through registration; the core never updates or deletes it.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identity
    pub user_id: UserId,
    /// Unique login name
    pub user_name: UserName,
    /// Unique email address
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
    /// Only active users can log in
    pub is_active: bool,
}

/// User awaiting its store-assigned id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl NewUser {
    /// New active user created now
    pub fn new(user_name: UserName, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            user_name,
            email,
            password_hash,
            created_at: Utc::now(),
            is_active: true,
        }
    }

    /// Attach the identity assigned by the store
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            user_name: self.user_name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = NewUser::new(
            UserName::new("reader").unwrap(),
            Email::new("reader@example.com").unwrap(),
            HashedPassword::from_stored("$argon2id$stub"),
        );
        assert!(user.is_active);

        let user = user.into_user(UserId::new(3));
        assert_eq!(user.user_id.get(), 3);
        assert_eq!(user.user_name.as_str(), "reader");
    }
}
