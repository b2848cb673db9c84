//! Video API handlers.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;
use vidvault_core::{CatalogError, CreateVideoRequest, IngestError, Video};

use super::middleware::AuthUser;
use crate::metrics::{UPLOADS_BY_ORIENTATION, UPLOADS_TOTAL, UPLOAD_BYTES_TOTAL};
use crate::state::AppState;

/// Multipart field carrying the video payload.
const UPLOAD_FIELD: &str = "video";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a video record
#[derive(Debug, Deserialize)]
pub struct CreateVideoBody {
    pub title: String,
    pub description: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct VideoErrorResponse {
    pub error: String,
}

type ErrorReply = (StatusCode, Json<VideoErrorResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(VideoErrorResponse {
            error: message.into(),
        }),
    )
}

fn catalog_error_reply(err: CatalogError) -> ErrorReply {
    match err {
        CatalogError::NotFound(id) => {
            error_reply(StatusCode::NOT_FOUND, format!("Video not found: {}", id))
        }
        other => error_reply(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

fn ingest_error_reply(err: IngestError) -> ErrorReply {
    let status = match &err {
        IngestError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        IngestError::NotFound(_) => StatusCode::NOT_FOUND,
        IngestError::Forbidden => StatusCode::FORBIDDEN,
        IngestError::Media(_) => StatusCode::UNPROCESSABLE_ENTITY,
        IngestError::Io(_) | IngestError::Publish(_) | IngestError::Catalog(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_reply(status, err.to_string())
}

fn upload_outcome(status: StatusCode) -> &'static str {
    if status.is_client_error() {
        "rejected"
    } else {
        "failed"
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a new video record owned by the authenticated user
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateVideoBody>,
) -> Result<(StatusCode, Json<Video>), ErrorReply> {
    if body.title.trim().is_empty() {
        return Err(error_reply(
            StatusCode::UNPROCESSABLE_ENTITY,
            "title cannot be empty",
        ));
    }

    let request = CreateVideoRequest {
        owner_id: user_id,
        title: body.title,
        description: body.description,
    };

    state
        .catalog()
        .create(request)
        .map(|video| (StatusCode::CREATED, Json(video)))
        .map_err(catalog_error_reply)
}

/// List videos owned by the authenticated user, newest first
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Video>>, ErrorReply> {
    state
        .catalog()
        .list_by_owner(user_id)
        .map(Json)
        .map_err(catalog_error_reply)
}

/// Get a video record by id
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Video>, ErrorReply> {
    state.catalog().get(id).map(Json).map_err(catalog_error_reply)
}

/// Upload the media for a video record.
///
/// Expects a multipart body with a `video` field. The payload is run through
/// the ingestion pipeline and, on success, the updated record is returned
/// with its retrieval URL set.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Video>, ErrorReply> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error_reply(StatusCode::BAD_REQUEST, format!("Malformed multipart: {}", e))
    })? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();

        let received = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&received);
        let body = futures::stream::try_unfold(field, move |mut field| {
            let counter = Arc::clone(&counter);
            async move {
                match field.chunk().await {
                    Ok(Some(chunk)) => {
                        counter.fetch_add(chunk.len() as u64, Ordering::Relaxed);
                        Ok(Some((chunk, field)))
                    }
                    Ok(None) => Ok(None),
                    Err(e) => Err(std::io::Error::other(e)),
                }
            }
        });

        return match state.ingestor().ingest(id, user_id, &content_type, body).await {
            Ok(video) => {
                UPLOADS_TOTAL.with_label_values(&["published"]).inc();
                UPLOAD_BYTES_TOTAL.inc_by(received.load(Ordering::Relaxed));
                if let Some(orientation) = orientation_from_url(video.video_url.as_deref()) {
                    UPLOADS_BY_ORIENTATION
                        .with_label_values(&[orientation])
                        .inc();
                }
                Ok(Json(video))
            }
            Err(e) => {
                let reply = ingest_error_reply(e);
                UPLOADS_TOTAL
                    .with_label_values(&[upload_outcome(reply.0)])
                    .inc();
                Err(reply)
            }
        };
    }

    Err(error_reply(
        StatusCode::BAD_REQUEST,
        format!("Missing multipart field '{}'", UPLOAD_FIELD),
    ))
}

/// Orientation prefix of a published object URL (second-to-last segment).
fn orientation_from_url(url: Option<&str>) -> Option<&'static str> {
    let mut segments = url?.rsplit('/');
    segments.next();
    match segments.next() {
        Some("landscape") => Some("landscape"),
        Some("portrait") => Some("portrait"),
        Some("other") => Some("other"),
        _ => None,
    }
}
