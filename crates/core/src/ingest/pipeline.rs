//! The video ingestion pipeline.
//!
//! An upload travels through a fixed sequence: admission checks, spooling
//! to local disk, faststart remux, orientation probe, publish to the object
//! store, and finally the catalog update that makes the video retrievable.
//! Every intermediate file lives in the spool directory behind a temp-file
//! guard, so any exit path leaves no local residue.

use std::sync::Arc;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use rand::RngCore;
use tempfile::{NamedTempFile, TempPath};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{Video, VideoCatalog};
use crate::media::{MediaTool, Orientation};
use crate::store::ObjectStore;

use super::error::IngestError;
use super::types::IngestConfig;

/// The only media type accepted for upload.
pub const ACCEPTED_MEDIA_TYPE: &str = "video/mp4";

/// Orchestrates the upload-to-published flow for a single video.
pub struct VideoIngestor {
    media: Arc<dyn MediaTool>,
    store: Arc<dyn ObjectStore>,
    catalog: Arc<dyn VideoCatalog>,
    config: IngestConfig,
}

impl VideoIngestor {
    pub fn new(
        media: Arc<dyn MediaTool>,
        store: Arc<dyn ObjectStore>,
        catalog: Arc<dyn VideoCatalog>,
        config: IngestConfig,
    ) -> Self {
        Self {
            media,
            store,
            catalog,
            config,
        }
    }

    /// Ingest an uploaded video body into the record identified by `video_id`.
    ///
    /// The upload is rejected before any disk or store activity when the
    /// declared media type is not mp4, the record is missing, or the record
    /// belongs to another user. On success the returned record carries the
    /// retrieval URL of the published, faststart-normalized file.
    pub async fn ingest<S>(
        &self,
        video_id: Uuid,
        user_id: Uuid,
        content_type: &str,
        body: S,
    ) -> Result<Video, IngestError>
    where
        S: Stream<Item = Result<Bytes, std::io::Error>> + Send,
    {
        check_media_type(content_type)?;

        let mut video = self.catalog.get(video_id)?;
        if video.owner_id != user_id {
            warn!(%video_id, %user_id, "upload rejected: not the owner");
            return Err(IngestError::Forbidden);
        }

        info!(%video_id, "ingesting upload");

        let spool_dir = self.config.spool_dir();
        let spool = NamedTempFile::new_in(&spool_dir)?;
        let bytes_spooled = spool_body(&spool, body).await?;
        debug!(%video_id, bytes_spooled, "upload spooled");

        // Guard the remux output before ffmpeg runs so a partial file is
        // removed on any exit path.
        let normalized_path = spool.path().with_extension("faststart.mp4");
        let normalized: TempPath = TempPath::from_path(normalized_path);

        self.media
            .remux_faststart(spool.path(), &normalized)
            .await?;
        drop(spool);

        let probe = self.media.probe(&normalized).await?;
        let orientation = probe.orientation()?;
        debug!(%video_id, %orientation, "orientation classified");

        let key = generate_object_key(orientation);
        self.store
            .put_file(&normalized, &key, ACCEPTED_MEDIA_TYPE)
            .await?;

        video.video_url = Some(self.store.object_url(&key));
        let video = self.catalog.update(&video)?;

        info!(%video_id, key, "upload published");
        Ok(video)
    }
}

fn check_media_type(content_type: &str) -> Result<(), IngestError> {
    let parsed = content_type
        .parse::<mime::Mime>()
        .map_err(|_| IngestError::UnsupportedMediaType(content_type.to_string()))?;

    if parsed.essence_str() != ACCEPTED_MEDIA_TYPE {
        return Err(IngestError::UnsupportedMediaType(content_type.to_string()));
    }
    Ok(())
}

async fn spool_body<S>(spool: &NamedTempFile, body: S) -> Result<u64, IngestError>
where
    S: Stream<Item = Result<Bytes, std::io::Error>> + Send,
{
    let mut file = tokio::fs::File::from_std(spool.as_file().try_clone()?);
    let mut written: u64 = 0;

    let mut body = std::pin::pin!(body);
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}

/// Object key for a published video: `{orientation}/{hex}.mp4` with 32
/// random bytes of entropy.
fn generate_object_key(orientation: Orientation) -> String {
    let mut entropy = [0u8; 32];
    rand::rng().fill_bytes(&mut entropy);
    format!("{}/{}.mp4", orientation.prefix(), hex::encode(entropy))
}
