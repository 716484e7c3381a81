//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - User registration and login with username + password
//! - Signed bearer tokens (HS256 JWT, 24 hour validity)
//! - Bearer middleware for protecting other routers
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, hashing runs on the blocking pool
//! - Failed logins never reveal whether the user exists
//! - Internal failures are logged, never echoed to clients

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::middleware::{AuthUser, require_bearer};
pub use presentation::router::auth_router;
pub use presentation::AuthAppState;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
