use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::ingest::IngestConfig;
use crate::media::MediaToolConfig;
use crate::store::StorageConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub media: MediaToolConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted upload body in bytes (default: 1 GiB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> u64 {
    1 << 30
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign and verify access tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens in seconds (default: 1 hour)
    #[serde(default = "default_token_valid_secs")]
    pub token_valid_secs: i64,
}

fn default_token_valid_secs() -> i64 {
    3600
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("vidvault.db")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub auth: SanitizedAuthConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: SanitizedStorageConfig,
    pub media: MediaToolConfig,
    pub ingest: IngestConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedAuthConfig {
    pub jwt_secret_configured: bool,
    pub token_valid_secs: i64,
}

/// Sanitized storage config (credentials redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedStorageConfig {
    pub bucket: String,
    pub region: String,
    pub credentials_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub path_style: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_base_url: Option<String>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            auth: SanitizedAuthConfig {
                jwt_secret_configured: !config.auth.jwt_secret.is_empty(),
                token_valid_secs: config.auth.token_valid_secs,
            },
            server: config.server.clone(),
            database: config.database.clone(),
            storage: SanitizedStorageConfig {
                bucket: config.storage.bucket.clone(),
                region: config.storage.region.clone(),
                credentials_configured: !config.storage.access_key.is_empty()
                    && !config.storage.secret_key.is_empty(),
                endpoint: config.storage.endpoint.clone(),
                path_style: config.storage.path_style,
                public_base_url: config.storage.public_base_url.clone(),
            },
            media: config.media.clone(),
            ingest: config.ingest.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_toml() -> &'static str {
        r#"
[auth]
jwt_secret = "super-secret"

[storage]
bucket = "vidvault-media"
region = "eu-west-1"
access_key = "AKIA123"
secret_key = "s3cr3t"
"#
    }

    #[test]
    fn test_deserialize_minimal_config() {
        let config: Config = toml::from_str(minimal_toml()).unwrap();
        assert_eq!(config.auth.jwt_secret, "super-secret");
        assert_eq!(config.auth.token_valid_secs, 3600);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.server.max_upload_bytes, 1 << 30);
        assert_eq!(config.database.path.to_str().unwrap(), "vidvault.db");
        assert_eq!(config.storage.bucket, "vidvault-media");
    }

    #[test]
    fn test_deserialize_missing_auth_fails() {
        let toml = r#"
[server]
port = 8080
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_missing_storage_fails() {
        let toml = r#"
[auth]
jwt_secret = "super-secret"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_with_custom_sections() {
        let toml = r#"
[auth]
jwt_secret = "super-secret"

[server]
host = "127.0.0.1"
port = 9000
max_upload_bytes = 1048576

[database]
path = "/data/videos.sqlite"

[storage]
bucket = "clips"
region = "local"
access_key = "minio"
secret_key = "minio123"
endpoint = "http://localhost:9000"
path_style = true

[media]
ffmpeg_path = "/opt/ffmpeg/bin/ffmpeg"
timeout_secs = 120
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.max_upload_bytes, 1048576);
        assert_eq!(config.database.path.to_str().unwrap(), "/data/videos.sqlite");
        assert_eq!(
            config.storage.endpoint.as_deref(),
            Some("http://localhost:9000")
        );
        assert!(config.storage.path_style);
        assert_eq!(
            config.media.ffmpeg_path,
            std::path::Path::new("/opt/ffmpeg/bin/ffmpeg")
        );
        assert_eq!(config.media.timeout_secs, 120);
    }

    #[test]
    fn test_sanitized_config_redacts_secrets() {
        let config: Config = toml::from_str(minimal_toml()).unwrap();
        let sanitized = SanitizedConfig::from(&config);

        assert!(sanitized.auth.jwt_secret_configured);
        assert!(sanitized.storage.credentials_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("s3cr3t"));
        assert!(!json.contains("AKIA123"));
    }
}
