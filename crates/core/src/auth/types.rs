use std::collections::HashMap;

use uuid::Uuid;

/// Request data relevant for authentication.
#[derive(Debug, Clone, Default)]
pub struct AuthRequest {
    /// Request headers, lowercase keys.
    pub headers: HashMap<String, String>,
    /// Source IP of the client, if known.
    pub source_ip: Option<String>,
}

impl AuthRequest {
    pub fn with_bearer_token(token: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("authorization".to_string(), format!("Bearer {}", token));
        Self {
            headers,
            source_ip: None,
        }
    }

    /// Extract the bearer token from the authorization header, if present.
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get("authorization")
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Id of the authenticated user.
    pub user_id: Uuid,
}
