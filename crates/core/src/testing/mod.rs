//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of the external service traits,
//! allowing pipeline and API testing without ffmpeg or an object store.

mod mock_catalog;
mod mock_media_tool;
mod mock_object_store;

pub use mock_catalog::MockCatalog;
pub use mock_media_tool::{MockMediaTool, RecordedRemux};
pub use mock_object_store::{MockObjectStore, RecordedPut};
