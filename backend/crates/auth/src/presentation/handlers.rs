//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::response::ApiResponse;
use platform::password::PasswordService;
use std::sync::Arc;

use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, TokenService,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};
use crate::presentation::middleware::AuthUser;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub passwords: PasswordService,
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            tokens: self.tokens.clone(),
            passwords: self.passwords.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Json<ApiResponse<AuthResponse>>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.passwords.clone(),
    );

    let output = use_case
        .execute(RegisterInput {
            user_name: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(
        "User registered successfully",
        output.into(),
    )))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<ApiResponse<AuthResponse>>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.passwords.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok("Login successful", output.into())))
}

// ============================================================================
// Current user
// ============================================================================

/// GET /api/auth/me (bearer token required)
pub async fn current_user(user: AuthUser) -> Json<ApiResponse<CurrentUserResponse>> {
    Json(ApiResponse::ok(
        "Authenticated",
        CurrentUserResponse {
            user_id: user.user_id.get(),
            username: user.user_name,
        },
    ))
}
