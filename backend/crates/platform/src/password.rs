//! Password Hashing and Verification
//!
//! - Argon2id hashing with a fresh random salt per hash (PHC string output)
//! - Verification driven by the parameters embedded in the stored hash
//! - Zeroization of clear text and peppered buffers
//! - Hashing moved off the async workers with `spawn_blocking`

use std::fmt;
use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length accepted at registration
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Argon2 parameters rejected
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Hashing cost
// ============================================================================

/// Argon2id cost parameters used for new hashes
///
/// Verification never consults these; it reads the parameters from the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingCost {
    /// Memory in KiB
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl HashingCost {
    /// Smallest parameters Argon2 accepts. Tests only.
    pub const fn minimal() -> Self {
        Self {
            memory_kib: Params::MIN_M_COST,
            iterations: 1,
            parallelism: 1,
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordHashError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidParams(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for HashingCost {
    /// OWASP: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Does not implement `Clone`
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse".to_string()).unwrap();
/// assert!(format!("{password:?}").contains("REDACTED"));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password, applying the registration policy
    ///
    /// - Not empty/whitespace only
    /// - Between [`MIN_PASSWORD_LENGTH`] and [`MAX_PASSWORD_LENGTH`] characters
    /// - No control characters
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::normalized(raw);
        let normalized = password.0.as_str();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Code points, not bytes
        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized.chars().any(char::is_control) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(password)
    }

    /// NFKC-normalize without applying the policy (login path)
    pub fn normalized(mut raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `cost` - Argon2 parameters for the new hash
    /// * `pepper` - Optional application-wide secret appended before hashing
    pub fn hash(
        &self,
        cost: &HashingCost,
        pepper: Option<&[u8]>,
    ) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);

        // 128-bit random salt
        let salt = SaltString::generate(&mut OsRng);

        let hash = cost
            .argon2()?
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, HashingCost};
///
/// let password = ClearTextPassword::new("my_secure_password".to_string()).unwrap();
/// let hashed = password.hash(&HashingCost::minimal(), None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a PHC string read from storage. Not validated here; a malformed
    /// value simply never verifies.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Argon2 compares in constant time. Returns `false` for a malformed hash.
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        let password_bytes = password.peppered(pepper);

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Async facade
// ============================================================================

/// Hashes and verifies on the blocking pool with a fixed cost and pepper
#[derive(Clone)]
pub struct PasswordService {
    cost: HashingCost,
    pepper: Option<Arc<Zeroizing<Vec<u8>>>>,
}

impl PasswordService {
    pub fn new(cost: HashingCost, pepper: Option<Vec<u8>>) -> Self {
        Self {
            cost,
            pepper: pepper.map(|p| Arc::new(Zeroizing::new(p))),
        }
    }

    fn pepper(&self) -> Option<&[u8]> {
        self.pepper.as_deref().map(|p| p.as_slice())
    }

    pub async fn hash(
        &self,
        password: ClearTextPassword,
    ) -> Result<HashedPassword, PasswordHashError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || password.hash(&service.cost, service.pepper()))
            .await
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
    }

    /// A panicked verification counts as a mismatch.
    pub async fn verify(&self, password: ClearTextPassword, hashed: HashedPassword) -> bool {
        let service = self.clone();
        tokio::task::spawn_blocking(move || hashed.verify(&password, service.pepper()))
            .await
            .unwrap_or(false)
    }
}

impl fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordService")
            .field("cost", &self.cost)
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> HashingCost {
        HashingCost::minimal()
    }

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("short".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));
    }

    #[test]
    fn test_password_minimum_length_accepted() {
        assert!(ClearTextPassword::new("sixsix".to_string()).is_ok());
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        let result = ClearTextPassword::new(String::new());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}defg".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_unicode_password() {
        let result = ClearTextPassword::new("パスワード安全です!".to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_nfkc_equivalent_passwords_verify() {
        // Fullwidth and ASCII forms normalize to the same string
        let registered = ClearTextPassword::new("ｐａｓｓｗｏｒｄ１".to_string()).unwrap();
        let hashed = registered.hash(&fast(), None).unwrap();
        assert!(hashed.verify(&ClearTextPassword::normalized("password1".to_string()), None));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::normalized("TestPassword123!".to_string());
        let hashed = password.hash(&fast(), None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::normalized("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let password = ClearTextPassword::normalized("TestPassword123!".to_string());
        let first = password.hash(&fast(), None).unwrap();
        let second = password.hash(&fast(), None).unwrap();
        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.as_phc_string().starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_uses_embedded_params() {
        let password = ClearTextPassword::normalized("TestPassword123!".to_string());
        let hashed = password.hash(&fast(), None).unwrap();
        // Verified with default-cost Argon2, still matches
        assert!(HashedPassword::from_stored(hashed.as_phc_string()).verify(&password, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::normalized("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(&fast(), Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = ClearTextPassword::normalized("TestPassword123!".to_string());
        assert!(!HashedPassword::from_stored("not_a_valid_hash").verify(&password, None));
        assert!(!HashedPassword::from_stored("").verify(&password, None));
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let cost = HashingCost {
            memory_kib: 0,
            iterations: 0,
            parallelism: 0,
        };
        let password = ClearTextPassword::normalized("TestPassword123!".to_string());
        assert!(matches!(
            password.hash(&cost, None),
            Err(PasswordHashError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::normalized("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let service = PasswordService::new(fast(), Some(b"pepper".to_vec()));
        assert!(format!("{service:?}").contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_service_round_trip() {
        let service = PasswordService::new(fast(), Some(b"pepper".to_vec()));
        let hashed = service
            .hash(ClearTextPassword::normalized("hunter22".to_string()))
            .await
            .unwrap();

        assert!(
            service
                .verify(ClearTextPassword::normalized("hunter22".to_string()), hashed.clone())
                .await
        );
        assert!(
            !service
                .verify(ClearTextPassword::normalized("hunter23".to_string()), hashed)
                .await
        );
    }
}
