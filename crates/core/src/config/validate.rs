use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Auth and storage sections exist (enforced by serde)
/// - Server port is not 0
/// - JWT secret is not empty
/// - Storage bucket and region are not empty
/// - Upload cap and tool timeout are not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.server.max_upload_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "server.max_upload_bytes cannot be 0".to_string(),
        ));
    }

    if config.auth.jwt_secret.is_empty() {
        return Err(ConfigError::ValidationError(
            "auth.jwt_secret cannot be empty".to_string(),
        ));
    }

    if config.storage.bucket.is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.bucket cannot be empty".to_string(),
        ));
    }

    if config.storage.region.is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.region cannot be empty".to_string(),
        ));
    }

    if config.media.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "media.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
