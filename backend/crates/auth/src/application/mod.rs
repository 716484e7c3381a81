//! Application Layer
//!
//! Use cases and application services.

use chrono::{DateTime, Utc};

pub mod config;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use config::{AuthConfig, ConfigError};
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{IssuedToken, TokenService, TokenSubject};

/// Result of a successful registration or login
#[derive(Debug, Clone)]
pub struct AuthOutput {
    pub token: String,
    pub user_name: String,
    pub expires_at: DateTime<Utc>,
}
