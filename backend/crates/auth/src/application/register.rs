//! Register Use Case
//!
//! Creates a new user account and signs the first token.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordService};

use crate::application::AuthOutput;
use crate::application::token::TokenService;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    passwords: PasswordService,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, passwords: PasswordService) -> Self {
        Self {
            user_repo,
            tokens,
            passwords,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let user_name =
            UserName::new(input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Friendly pre-check; the unique indexes still decide on insert
        if self
            .user_repo
            .exists_by_user_name_or_email(&user_name, &email)
            .await?
        {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = self
            .passwords
            .hash(password)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = self
            .user_repo
            .create(&NewUser::new(user_name, email, password_hash))
            .await?;

        let issued = self.tokens.issue(user.user_id, user.user_name.as_str())?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(AuthOutput {
            token: issued.token,
            user_name: user.user_name.into_inner(),
            expires_at: issued.expires_at,
        })
    }
}
