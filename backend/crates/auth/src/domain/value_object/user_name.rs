//! User Name Value Object
//!
//! Login handle. Compared exactly (case-sensitive) everywhere; no case
//! folding or trimming happens, so what is registered is what must be typed.

use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty or whitespace only
    Empty,

    /// User name is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// User name contains a control character
    ControlCharacter { position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username is required"),
            Self::TooLong { length, max } => {
                write!(f, "Username is too long ({length} chars, maximum {max})")
            }
            Self::ControlCharacter { position } => {
                write!(f, "Username contains a control character at position {position}")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated user name
///
/// # Invariants
/// - Not blank
/// - At most USER_NAME_MAX_LENGTH characters
/// - No control characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let value = input.into();

        if value.trim().is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = value.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some(position) = value.chars().position(char::is_control) {
            return Err(UserNameError::ControlCharacter { position });
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_names() {
        assert!(UserName::new("admin").is_ok());
        assert!(UserName::new("Jane Doe").is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let result = UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1));
        assert!(matches!(result, Err(UserNameError::TooLong { length: 51, .. })));
    }

    #[test]
    fn test_control_character_rejected() {
        assert_eq!(
            UserName::new("bad\nname"),
            Err(UserNameError::ControlCharacter { position: 3 })
        );
    }

    #[test]
    fn test_case_is_preserved() {
        let name = UserName::new("Admin").unwrap();
        assert_eq!(name.as_str(), "Admin");
        assert_ne!(name, UserName::new("admin").unwrap());
    }
}
