//! Login Use Case
//!
//! Verifies credentials and signs a token. Writes nothing.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordService};

use crate::application::AuthOutput;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    passwords: PasswordService,
}

impl<U> LoginUseCase<U>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        // Unknown, inactive and wrong-password all fail the same way
        let user = self
            .user_repo
            .find_active_by_user_name(&input.user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::normalized(input.password);
        if !self
            .passwords
            .verify(password, user.password_hash.clone())
            .await
        {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(user.user_id, user.user_name.as_str())?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput {
            token: issued.token,
            user_name: user.user_name.into_inner(),
            expires_at: issued.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::domain::entity::user::NewUser;
    use crate::domain::value_object::{email::Email, user_name::UserName};
    use crate::infra::memory::InMemoryUserRepository;
    use platform::password::HashingCost;

    struct Fixture {
        repo: Arc<InMemoryUserRepository>,
        tokens: Arc<TokenService>,
        passwords: PasswordService,
    }

    impl Fixture {
        async fn with_user(user_name: &str, password: &str) -> Self {
            let mut config = AuthConfig::new("0123456789abcdef0123456789abcdef").unwrap();
            config.hashing_cost = HashingCost::minimal();
            let fixture = Self {
                repo: Arc::new(InMemoryUserRepository::new()),
                tokens: Arc::new(TokenService::new(&config).unwrap()),
                passwords: config.password_service(),
            };
            RegisterUseCase::new(
                fixture.repo.clone(),
                fixture.tokens.clone(),
                fixture.passwords.clone(),
            )
            .execute(RegisterInput {
                user_name: user_name.to_string(),
                email: format!("{user_name}@example.com"),
                password: password.to_string(),
            })
            .await
            .unwrap();
            fixture
        }

        fn login(&self) -> LoginUseCase<InMemoryUserRepository> {
            LoginUseCase::new(self.repo.clone(), self.tokens.clone(), self.passwords.clone())
        }
    }

    fn input(user_name: &str, password: &str) -> LoginInput {
        LoginInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_succeeds() {
        let fixture = Fixture::with_user("reader", "secret123").await;
        let output = fixture.login().execute(input("reader", "secret123")).await.unwrap();

        let subject = fixture.tokens.verify(&output.token).unwrap();
        assert_eq!(subject.user_name, "reader");
        assert_eq!(output.user_name, "reader");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let fixture = Fixture::with_user("reader", "secret123").await;

        let wrong_password = fixture
            .login()
            .execute(input("reader", "secret124"))
            .await
            .unwrap_err();
        let unknown_user = fixture
            .login()
            .execute(input("nobody", "secret123"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_user_name_match_is_exact() {
        let fixture = Fixture::with_user("reader", "secret123").await;
        assert!(matches!(
            fixture.login().execute(input("Reader", "secret123")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_inactive_user_cannot_login() {
        let fixture = Fixture::with_user("reader", "secret123").await;
        let password_hash = fixture
            .passwords
            .hash(ClearTextPassword::normalized("secret123".to_string()))
            .await
            .unwrap();
        let mut dormant = NewUser::new(
            UserName::new("dormant").unwrap(),
            Email::new("dormant@example.com").unwrap(),
            password_hash,
        );
        dormant.is_active = false;
        crate::domain::repository::UserRepository::create(fixture.repo.as_ref(), &dormant)
            .await
            .unwrap();

        assert!(matches!(
            fixture.login().execute(input("dormant", "secret123")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_writes_nothing() {
        let fixture = Fixture::with_user("reader", "secret123").await;
        fixture.login().execute(input("reader", "secret123")).await.unwrap();
        let _ = fixture.login().execute(input("reader", "nope-nope")).await;
        assert_eq!(fixture.repo.len().unwrap(), 1);
    }
}
