//! Application Configuration
//!
//! Resolved once at process start and shared by `Arc`.

use std::fmt;
use std::time::Duration;

use platform::password::{HashingCost, PasswordService};
use thiserror::Error;

/// Minimum signing key length in bytes (HS256 key size)
pub const MIN_JWT_KEY_BYTES: usize = 32;

/// Default token issuer
pub const DEFAULT_JWT_ISSUER: &str = "library-api";

/// Default token audience
pub const DEFAULT_JWT_AUDIENCE: &str = "library-clients";

/// Token validity window
pub const TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Configuration errors, all fatal at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("JWT_KEY must be at least {min} bytes (got {actual})")]
    KeyTooShort { min: usize, actual: usize },
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing key
    pub jwt_key: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    /// Token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Argon2 parameters for new hashes
    pub hashing_cost: HashingCost,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Config with default issuer/audience; rejects short keys
    pub fn new(jwt_key: impl Into<String>) -> Result<Self, ConfigError> {
        let jwt_key = jwt_key.into();
        if jwt_key.len() < MIN_JWT_KEY_BYTES {
            return Err(ConfigError::KeyTooShort {
                min: MIN_JWT_KEY_BYTES,
                actual: jwt_key.len(),
            });
        }

        Ok(Self {
            jwt_key,
            jwt_issuer: DEFAULT_JWT_ISSUER.to_string(),
            jwt_audience: DEFAULT_JWT_AUDIENCE.to_string(),
            token_ttl: TOKEN_TTL,
            hashing_cost: HashingCost::default(),
            password_pepper: None,
        })
    }

    /// Read `JWT_KEY`, `JWT_ISSUER`, `JWT_AUDIENCE` and `PASSWORD_PEPPER`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jwt_key = non_empty("JWT_KEY").ok_or(ConfigError::Missing("JWT_KEY"))?;
        let mut config = Self::new(jwt_key)?;

        if let Some(issuer) = non_empty("JWT_ISSUER") {
            config.jwt_issuer = issuer;
        }
        if let Some(audience) = non_empty("JWT_AUDIENCE") {
            config.jwt_audience = audience;
        }
        config.password_pepper = non_empty("PASSWORD_PEPPER").map(String::into_bytes);

        Ok(config)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Hashing service bound to this config's cost and pepper
    pub fn password_service(&self) -> PasswordService {
        PasswordService::new(self.hashing_cost, self.password_pepper.clone())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_key", &"[REDACTED]")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .field("token_ttl", &self.token_ttl)
            .field("hashing_cost", &self.hashing_cost)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
