//! Object store module for publishing files to remote key-addressed storage.
//!
//! Provides the `ObjectStore` trait and an S3-backed implementation. A
//! publish is a single whole-object PUT streamed from a local file handle;
//! there is no multipart splitting and no retry. The retrieval URL for a
//! published key is composed deterministically from the configured bucket
//! and region.

mod config;
mod error;
mod s3;
mod traits;

pub use config::StorageConfig;
pub use error::StoreError;
pub use s3::S3ObjectStore;
pub use traits::ObjectStore;
