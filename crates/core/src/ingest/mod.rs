//! Upload ingestion: spool, normalize, classify, publish, record.

mod error;
mod pipeline;
mod types;

pub use error::IngestError;
pub use pipeline::{VideoIngestor, ACCEPTED_MEDIA_TYPE};
pub use types::IngestConfig;
