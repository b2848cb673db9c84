//! Mock video catalog for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::{CatalogError, CreateVideoRequest, Video, VideoCatalog};

/// Mock in-memory implementation of the VideoCatalog trait.
pub struct MockCatalog {
    videos: Mutex<HashMap<Uuid, Video>>,
    update_count: AtomicUsize,
    fail_updates: AtomicBool,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            videos: Mutex::new(HashMap::new()),
            update_count: AtomicUsize::new(0),
            fail_updates: AtomicBool::new(false),
        }
    }

    /// Insert a record directly, bypassing create.
    pub fn insert(&self, video: Video) {
        self.videos.lock().unwrap().insert(video.id, video);
    }

    /// Seed a fresh record owned by `owner_id` and return it.
    pub fn seed_video(&self, owner_id: Uuid) -> Video {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            owner_id,
            title: "Test Video".to_string(),
            description: None,
            created_at: now,
            updated_at: now,
            video_url: None,
            thumbnail_url: None,
        };
        self.insert(video.clone());
        video
    }

    /// Number of updates applied so far.
    pub fn update_count(&self) -> usize {
        self.update_count.load(Ordering::Relaxed)
    }

    /// Make all subsequent updates fail.
    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::Relaxed);
    }
}

impl VideoCatalog for MockCatalog {
    fn create(&self, request: CreateVideoRequest) -> Result<Video, CatalogError> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            owner_id: request.owner_id,
            title: request.title,
            description: request.description,
            created_at: now,
            updated_at: now,
            video_url: None,
            thumbnail_url: None,
        };
        self.insert(video.clone());
        Ok(video)
    }

    fn get(&self, id: Uuid) -> Result<Video, CatalogError> {
        self.videos
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, CatalogError> {
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(videos)
    }

    fn update(&self, video: &Video) -> Result<Video, CatalogError> {
        if self.fail_updates.load(Ordering::Relaxed) {
            return Err(CatalogError::Database("simulated failure".to_string()));
        }

        let mut videos = self.videos.lock().unwrap();
        if !videos.contains_key(&video.id) {
            return Err(CatalogError::NotFound(video.id));
        }

        let mut updated = video.clone();
        updated.updated_at = Utc::now();
        videos.insert(updated.id, updated.clone());
        self.update_count.fetch_add(1, Ordering::Relaxed);
        Ok(updated)
    }

    fn remove(&self, id: Uuid) -> Result<(), CatalogError> {
        self.videos
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_and_get() {
        let catalog = MockCatalog::new();
        let owner = Uuid::new_v4();
        let video = catalog.seed_video(owner);

        let fetched = catalog.get(video.id).unwrap();
        assert_eq!(fetched.owner_id, owner);
    }

    #[test]
    fn test_update_tracking() {
        let catalog = MockCatalog::new();
        let mut video = catalog.seed_video(Uuid::new_v4());

        video.video_url = Some("https://mock.store.test/landscape/ab.mp4".to_string());
        catalog.update(&video).unwrap();
        assert_eq!(catalog.update_count(), 1);
    }

    #[test]
    fn test_failing_updates() {
        let catalog = MockCatalog::new();
        let video = catalog.seed_video(Uuid::new_v4());
        catalog.set_fail_updates(true);

        assert!(catalog.update(&video).is_err());
        assert_eq!(catalog.update_count(), 0);
    }
}
