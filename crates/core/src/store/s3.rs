//! S3-backed object store implementation.

use async_trait::async_trait;
use s3::{creds::Credentials, Bucket, Region};
use std::path::Path;
use tokio::fs::File;
use tracing::{debug, info};

use super::config::StorageConfig;
use super::error::StoreError;
use super::traits::ObjectStore;

/// Object store backed by an S3-compatible bucket.
pub struct S3ObjectStore {
    bucket: Bucket,
    bucket_name: String,
    region_name: String,
    public_base_url: Option<String>,
}

impl S3ObjectStore {
    /// Creates a store from configuration, building the S3 client.
    pub fn new(config: &StorageConfig) -> Result<Self, StoreError> {
        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config
                .region
                .parse::<Region>()
                .map_err(|e| StoreError::Configuration(e.to_string()))?,
        };

        let credentials = Credentials {
            access_key: Some(config.access_key.clone()),
            secret_key: Some(config.secret_key.clone()),
            security_token: None,
            session_token: None,
            expiration: None,
        };

        let bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| StoreError::Configuration(e.to_string()))
            .map(|b| {
                if config.path_style {
                    b.with_path_style()
                } else {
                    b
                }
            })?;

        Ok(Self {
            bucket,
            bucket_name: config.bucket.clone(),
            region_name: config.region.clone(),
            public_base_url: config
                .public_base_url
                .as_ref()
                .map(|u| u.trim_end_matches('/').to_string()),
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn name(&self) -> &str {
        "s3"
    }

    async fn put_file(
        &self,
        path: &Path,
        key: &str,
        content_type: &str,
    ) -> Result<(), StoreError> {
        let mut file = File::open(path).await?;

        debug!(key, path = %path.display(), "starting object upload");
        let status = self
            .bucket
            .put_object_stream_with_content_type(&mut file, key, content_type)
            .await
            .map_err(|e| StoreError::publish_failed(key, e.to_string()))?;

        if status >= 300 {
            return Err(StoreError::UnexpectedStatus {
                key: key.to_string(),
                status,
            });
        }

        info!(key, "finished object upload");
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base, key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket_name, self.region_name, key
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> StorageConfig {
        StorageConfig {
            bucket: "vidvault-media".to_string(),
            region: "eu-west-1".to_string(),
            access_key: "AKIA123".to_string(),
            secret_key: "secret".to_string(),
            endpoint: None,
            path_style: false,
            public_base_url: None,
        }
    }

    #[test]
    fn test_object_url_aws_form() {
        let store = S3ObjectStore::new(&test_config()).unwrap();
        assert_eq!(
            store.object_url("landscape/abc123.mp4"),
            "https://vidvault-media.s3.eu-west-1.amazonaws.com/landscape/abc123.mp4"
        );
    }

    #[test]
    fn test_object_url_custom_base() {
        let mut config = test_config();
        config.endpoint = Some("http://localhost:9000".to_string());
        config.path_style = true;
        config.public_base_url = Some("http://localhost:9000/vidvault-media/".to_string());

        let store = S3ObjectStore::new(&config).unwrap();
        assert_eq!(
            store.object_url("other/xyz.mp4"),
            "http://localhost:9000/vidvault-media/other/xyz.mp4"
        );
    }
}
