//! SQLite-backed video catalog implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::{CatalogError, CreateVideoRequest, Video, VideoCatalog};

/// SQLite-backed video catalog.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Create a new SQLite catalog, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite catalog (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS videos (
                id TEXT PRIMARY KEY,
                owner_id TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                video_url TEXT,
                thumbnail_url TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_videos_owner ON videos(owner_id);
            CREATE INDEX IF NOT EXISTS idx_videos_created ON videos(created_at);
            "#,
        )
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(())
    }

    fn row_to_video(row: &Row<'_>) -> rusqlite::Result<Video> {
        let id_str: String = row.get(0)?;
        let owner_str: String = row.get(1)?;
        let created_str: String = row.get(4)?;
        let updated_str: String = row.get(5)?;

        Ok(Video {
            id: Uuid::parse_str(&id_str).unwrap_or_default(),
            owner_id: Uuid::parse_str(&owner_str).unwrap_or_default(),
            title: row.get(2)?,
            description: row.get(3)?,
            created_at: parse_timestamp(&created_str),
            updated_at: parse_timestamp(&updated_str),
            video_url: row.get(6)?,
            thumbnail_url: row.get(7)?,
        })
    }
}

fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

const SELECT_COLUMNS: &str =
    "id, owner_id, title, description, created_at, updated_at, video_url, thumbnail_url";

impl VideoCatalog for SqliteCatalog {
    fn create(&self, request: CreateVideoRequest) -> Result<Video, CatalogError> {
        let conn = self.conn.lock().unwrap();
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

        conn.execute(
            "INSERT INTO videos (id, owner_id, title, description, created_at, updated_at, video_url, thumbnail_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, NULL)",
            params![
                video.id.to_string(),
                video.owner_id.to_string(),
                video.title,
                video.description,
                video.created_at.to_rfc3339(),
                video.updated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(video)
    }

    fn get(&self, id: Uuid) -> Result<Video, CatalogError> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            &format!("SELECT {} FROM videos WHERE id = ?1", SELECT_COLUMNS),
            params![id.to_string()],
            Self::row_to_video,
        )
        .optional()
        .map_err(|e| CatalogError::Database(e.to_string()))?
        .ok_or(CatalogError::NotFound(id))
    }

    fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, CatalogError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM videos WHERE owner_id = ?1 ORDER BY created_at DESC",
                SELECT_COLUMNS
            ))
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![owner_id.to_string()], Self::row_to_video)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| CatalogError::Database(e.to_string()))
    }

    fn update(&self, video: &Video) -> Result<Video, CatalogError> {
        let updated_at = Utc::now();
        {
            let conn = self.conn.lock().unwrap();
            let affected = conn
                .execute(
                    "UPDATE videos
                     SET title = ?2, description = ?3, video_url = ?4, thumbnail_url = ?5, updated_at = ?6
                     WHERE id = ?1",
                    params![
                        video.id.to_string(),
                        video.title,
                        video.description,
                        video.video_url,
                        video.thumbnail_url,
                        updated_at.to_rfc3339(),
                    ],
                )
                .map_err(|e| CatalogError::Database(e.to_string()))?;

            if affected == 0 {
                return Err(CatalogError::NotFound(video.id));
            }
        }

        self.get(video.id)
    }

    fn remove(&self, id: Uuid) -> Result<(), CatalogError> {
        let conn = self.conn.lock().unwrap();
        let affected = conn
            .execute("DELETE FROM videos WHERE id = ?1", params![id.to_string()])
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        if affected == 0 {
            return Err(CatalogError::NotFound(id));
        }
        Ok(())
    }
}
