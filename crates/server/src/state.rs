use std::sync::Arc;
use vidvault_core::{Authenticator, Config, SanitizedConfig, VideoCatalog, VideoIngestor};

/// Shared application state
pub struct AppState {
    config: Config,
    authenticator: Arc<dyn Authenticator>,
    catalog: Arc<dyn VideoCatalog>,
    ingestor: Arc<VideoIngestor>,
}

impl AppState {
    pub fn new(
        config: Config,
        authenticator: Arc<dyn Authenticator>,
        catalog: Arc<dyn VideoCatalog>,
        ingestor: Arc<VideoIngestor>,
    ) -> Self {
        Self {
            config,
            authenticator,
            catalog,
            ingestor,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub fn catalog(&self) -> &dyn VideoCatalog {
        self.catalog.as_ref()
    }

    pub fn ingestor(&self) -> &VideoIngestor {
        self.ingestor.as_ref()
    }
}
