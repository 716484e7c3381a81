//! Bearer Token Issuer/Verifier
//!
//! HS256 JWTs carrying the user id (`sub`), user name (`name`), a unique
//! `jti`, and the configured issuer and audience. Tokens expire 24 hours
//! after issuance.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// User name
    pub name: String,
    /// Unique token id
    pub jti: String,
    pub iss: String,
    pub aud: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Identity recovered from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub user_name: String,
}

/// Signs and verifies bearer tokens with the process-wide key
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl: chrono::Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let ttl = chrono::Duration::from_std(config.token_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid token TTL: {e}")))?;

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.set_issuer(&[config.jwt_issuer.as_str()]);
        validation.set_audience(&[config.jwt_audience.as_str()]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_key.as_bytes()),
            validation,
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            ttl,
        })
    }

    /// Issue a token valid for 24 hours from now
    pub fn issue(&self, user_id: UserId, user_name: &str) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, user_name, Utc::now())
    }

    pub fn issue_at(
        &self,
        user_id: UserId,
        user_name: &str,
        now: DateTime<Utc>,
    ) -> AuthResult<IssuedToken> {
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            name: user_name.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("JWT encoding error: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature, issuer, audience and expiry
    pub fn verify(&self, token: &str) -> AuthResult<TokenSubject> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<TokenSubject> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AuthError::InvalidToken
            })?
            .claims;

        if now.timestamp() > claims.exp {
            return Err(AuthError::TokenExpired);
        }

        let user_id = claims
            .sub
            .parse::<i64>()
            .map(UserId::new)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(TokenSubject {
            user_id,
            user_name: claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    const KEY: &str = "0123456789abcdef0123456789abcdef";

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::new(KEY).unwrap()).unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service();
        let issued = tokens.issue(UserId::new(7), "reader").unwrap();

        let subject = tokens.verify(&issued.token).unwrap();
        assert_eq!(subject.user_id, UserId::new(7));
        assert_eq!(subject.user_name, "reader");
    }

    #[test]
    fn test_expires_after_24_hours() {
        let tokens = service();
        let issued = tokens.issue_at(UserId::new(1), "reader", t0()).unwrap();
        assert_eq!(issued.expires_at, t0() + Duration::hours(24));

        let almost = t0() + Duration::hours(23) + Duration::minutes(59);
        assert!(tokens.verify_at(&issued.token, almost).is_ok());

        let after = t0() + Duration::hours(24) + Duration::minutes(1);
        assert!(matches!(
            tokens.verify_at(&issued.token, after),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens = service();
        let a = tokens.issue_at(UserId::new(1), "reader", t0()).unwrap();
        let b = tokens.issue_at(UserId::new(1), "reader", t0()).unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_wrong_key_rejected() {
        let issued = service().issue(UserId::new(1), "reader").unwrap();
        let other =
            TokenService::new(&AuthConfig::new("ffffffffffffffffffffffffffffffff").unwrap())
                .unwrap();
        assert!(matches!(
            other.verify(&issued.token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_issuer_or_audience_rejected() {
        let issued = service().issue(UserId::new(1), "reader").unwrap();

        let mut config = AuthConfig::new(KEY).unwrap();
        config.jwt_issuer = "someone-else".into();
        let tokens = TokenService::new(&config).unwrap();
        assert!(matches!(tokens.verify(&issued.token), Err(AuthError::InvalidToken)));

        let mut config = AuthConfig::new(KEY).unwrap();
        config.jwt_audience = "someone-else".into();
        let tokens = TokenService::new(&config).unwrap();
        assert!(matches!(tokens.verify(&issued.token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            service().verify("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(service().verify(""), Err(AuthError::InvalidToken)));
    }
}
