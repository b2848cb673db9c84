//! JWT bearer-token authentication.

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::traits::{AuthError, Authenticator};
use super::types::{AuthRequest, Identity};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user id.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Authenticator validating HS256-signed bearer tokens.
pub struct JwtAuthenticator {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
}

impl JwtAuthenticator {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for a user, valid for `valid_secs` seconds.
    pub fn issue_token(&self, user_id: Uuid, valid_secs: i64) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: chrono::Utc::now().timestamp() + valid_secs,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::ConfigurationError(e.to_string()))
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Identity, AuthError> {
        let token = request.bearer_token().ok_or(AuthError::NotAuthenticated)?;

        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;

        let user_id = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AuthError::InvalidCredentials("subject is not a user id".to_string()))?;

        debug!(%user_id, "authenticated request");
        Ok(Identity { user_id })
    }

    fn method_name(&self) -> &'static str {
        "jwt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip() {
        let auth = JwtAuthenticator::new("test-secret");
        let user_id = Uuid::new_v4();
        let token = auth.issue_token(user_id, 3600).unwrap();

        let identity = auth
            .authenticate(&AuthRequest::with_bearer_token(&token))
            .await
            .unwrap();
        assert_eq!(identity.user_id, user_id);
    }

    #[tokio::test]
    async fn test_missing_token() {
        let auth = JwtAuthenticator::new("test-secret");
        let result = auth.authenticate(&AuthRequest::default()).await;
        assert!(matches!(result, Err(AuthError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn test_wrong_secret() {
        let issuer = JwtAuthenticator::new("secret-a");
        let verifier = JwtAuthenticator::new("secret-b");
        let token = issuer.issue_token(Uuid::new_v4(), 3600).unwrap();

        let result = verifier
            .authenticate(&AuthRequest::with_bearer_token(&token))
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_expired_token() {
        let auth = JwtAuthenticator::new("test-secret");
        let token = auth.issue_token(Uuid::new_v4(), -120).unwrap();

        let result = auth
            .authenticate(&AuthRequest::with_bearer_token(&token))
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_non_uuid_subject() {
        let auth = JwtAuthenticator::new("test-secret");
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let result = auth
            .authenticate(&AuthRequest::with_bearer_token(&token))
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }
}
