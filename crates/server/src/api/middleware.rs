//! Authentication and metrics middleware for API routes.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{request::Parts, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;
use vidvault_core::{AuthError, AuthRequest, Identity};

use crate::metrics::{
    normalize_path, AUTH_FAILURES_TOTAL, HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUESTS_TOTAL,
    HTTP_REQUEST_DURATION,
};
use crate::state::AppState;

/// Metrics middleware that tracks HTTP request duration and counts.
///
/// This middleware records:
/// - Request duration (histogram)
/// - Request count (counter)
/// - Requests in flight (gauge)
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path());

    HTTP_REQUESTS_IN_FLIGHT.inc();

    let response = next.run(request).await;

    HTTP_REQUESTS_IN_FLIGHT.dec();

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    HTTP_REQUEST_DURATION
        .with_label_values(&[&method, &path, &status])
        .observe(duration);
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, &status])
        .inc();

    response
}

/// Authentication middleware that validates requests using the configured authenticator.
///
/// Extracts the bearer token from request headers and validates it against the
/// authenticator in AppState. On success the authenticated Identity is inserted
/// into request extensions; otherwise a 401 Unauthorized is returned.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let headers: HashMap<String, String> = request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_lowercase(), v.to_string()))
        })
        .collect();

    let source_ip = request
        .extensions()
        .get::<std::net::SocketAddr>()
        .map(|addr| addr.ip().to_string());

    let auth_request = AuthRequest { headers, source_ip };

    match state.authenticator().authenticate(&auth_request).await {
        Ok(identity) => {
            let mut request = request;
            request.extensions_mut().insert(identity);
            Ok(next.run(request).await)
        }
        Err(AuthError::NotAuthenticated) => {
            AUTH_FAILURES_TOTAL
                .with_label_values(&["not_authenticated"])
                .inc();
            Err(StatusCode::UNAUTHORIZED)
        }
        Err(AuthError::InvalidCredentials(_)) => {
            AUTH_FAILURES_TOTAL
                .with_label_values(&["invalid_credentials"])
                .inc();
            Err(StatusCode::UNAUTHORIZED)
        }
        Err(_) => {
            AUTH_FAILURES_TOTAL
                .with_label_values(&["internal_error"])
                .inc();
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Extractor for the authenticated user's id.
///
/// Reads the Identity stored in request extensions by the auth middleware.
/// Rejects with 401 when no identity is present.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Uuid);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = parts
            .extensions
            .get::<Identity>()
            .map(|identity| AuthUser(identity.user_id))
            .ok_or(StatusCode::UNAUTHORIZED);
        std::future::ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request},
        middleware,
        routing::get,
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;
    use vidvault_core::testing::{MockCatalog, MockMediaTool, MockObjectStore};
    use vidvault_core::{
        load_config_from_str, Config, IngestConfig, JwtAuthenticator, VideoIngestor,
    };

    async fn dummy_handler() -> &'static str {
        "OK"
    }

    fn create_test_config() -> Config {
        load_config_from_str(
            r#"
[auth]
jwt_secret = "test-secret"

[storage]
bucket = "vidvault-media"
region = "eu-west-1"
access_key = "AKIA123"
secret_key = "shhh"
"#,
        )
        .unwrap()
    }

    fn create_test_state() -> Arc<AppState> {
        let config = create_test_config();
        let catalog = Arc::new(MockCatalog::new());
        let ingestor = Arc::new(VideoIngestor::new(
            Arc::new(MockMediaTool::new()),
            Arc::new(MockObjectStore::new()),
            catalog.clone(),
            IngestConfig::default(),
        ));

        Arc::new(AppState::new(
            config.clone(),
            Arc::new(JwtAuthenticator::new(&config.auth.jwt_secret)),
            catalog,
            ingestor,
        ))
    }

    fn test_app(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/test", get(dummy_handler))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_valid_token_allows_request() {
        let state = create_test_state();
        let token = JwtAuthenticator::new("test-secret")
            .issue_token(Uuid::new_v4(), 3600)
            .unwrap();

        let request = Request::builder()
            .uri("/test")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = test_app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let state = create_test_state();

        let request = Request::builder()
            .uri("/test")
            .body(Body::empty())
            .unwrap();

        let response = test_app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_bad_token_is_unauthorized() {
        let state = create_test_state();

        let request = Request::builder()
            .uri("/test")
            .header(header::AUTHORIZATION, "Bearer not.a.token")
            .body(Body::empty())
            .unwrap();

        let response = test_app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_auth_user_extractor() {
        use http_body_util::BodyExt;

        async fn user_handler(AuthUser(user_id): AuthUser) -> String {
            user_id.to_string()
        }

        let state = create_test_state();
        let user_id = Uuid::new_v4();
        let token = JwtAuthenticator::new("test-secret")
            .issue_token(user_id, 3600)
            .unwrap();

        let app = Router::new()
            .route("/test", get(user_handler))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ))
            .with_state(state);

        let request = Request::builder()
            .uri("/test")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(String::from_utf8(body.to_vec()).unwrap(), user_id.to_string());
    }
}
