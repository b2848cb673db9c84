//! Configuration for the object store module.

use serde::{Deserialize, Serialize};

/// Configuration for S3-compatible object storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Bucket name.
    pub bucket: String,

    /// AWS region name (e.g. "eu-west-1").
    pub region: String,

    /// Access key id.
    pub access_key: String,

    /// Secret access key.
    pub secret_key: String,

    /// Custom endpoint for S3-compatible stores (MinIO, localstack). When
    /// set, the region name is only used for URL composition.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Use path-style addressing instead of virtual-hosted-style. Most
    /// non-AWS stores need this.
    #[serde(default)]
    pub path_style: bool,

    /// Base URL for composed retrieval URLs. Defaults to the AWS
    /// virtual-hosted form `https://{bucket}.s3.{region}.amazonaws.com`.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let toml = r#"
bucket = "vidvault-media"
region = "eu-west-1"
access_key = "AKIA123"
secret_key = "shhh"
"#;
        let config: StorageConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bucket, "vidvault-media");
        assert_eq!(config.region, "eu-west-1");
        assert!(config.endpoint.is_none());
        assert!(!config.path_style);
        assert!(config.public_base_url.is_none());
    }

    #[test]
    fn test_deserialize_custom_endpoint() {
        let toml = r#"
bucket = "media"
region = "local"
access_key = "minio"
secret_key = "minio123"
endpoint = "http://localhost:9000"
path_style = true
public_base_url = "http://localhost:9000/media"
"#;
        let config: StorageConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
        assert!(config.path_style);
    }
}
