//! Note repository implementation.

use sqlx::PgPool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::note::{CreateNote, Note, UpdateNote};

/// Repository for note CRUD operations.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new note.
    pub async fn insert(&self, data: &CreateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (user_id, title, content, metadata) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create note", e))
    }

    /// Find a note by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find note", e))
    }

    /// Apply a partial update to a note.
    ///
    /// `title`/`content` replace the stored value when present; metadata
    /// merges into the stored map via jsonb concatenation, all in one
    /// statement. Returns `None` when the note does not exist.
    pub async fn update(&self, id: i64, data: &UpdateNote) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET \
                 title = COALESCE($2, title), \
                 content = COALESCE($3, content), \
                 metadata = metadata || COALESCE($4, '{}'::jsonb), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.metadata)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update note", e))
    }

    /// List notes, most recently updated first.
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes ORDER BY updated_at DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notes", e))
    }
}
