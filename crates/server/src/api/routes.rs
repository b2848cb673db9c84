use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{auth_middleware, metrics_middleware};
use super::{handlers, videos};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.config().server.max_upload_bytes as usize;

    // Everything except health and metrics requires a valid bearer token
    let protected = Router::new()
        .route("/config", get(handlers::get_config))
        .route("/videos", post(videos::create_video))
        .route("/videos", get(videos::list_videos))
        .route("/videos/{id}", get(videos::get_video))
        .route("/videos/{id}/upload", post(videos::upload_video))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected)
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
