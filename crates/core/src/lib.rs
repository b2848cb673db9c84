pub mod auth;
pub mod catalog;
pub mod config;
pub mod ingest;
pub mod media;
pub mod store;
pub mod testing;

pub use auth::{AuthError, AuthRequest, Authenticator, Identity, JwtAuthenticator};
pub use catalog::{CatalogError, CreateVideoRequest, SqliteCatalog, Video, VideoCatalog};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use ingest::{IngestConfig, IngestError, VideoIngestor, ACCEPTED_MEDIA_TYPE};
pub use media::{FfmpegTool, MediaTool, MediaToolConfig, MediaToolError, Orientation};
pub use store::{ObjectStore, S3ObjectStore, StorageConfig, StoreError};
