//! Note CRUD service.

use std::sync::Arc;

use tracing::info;

use notehub_core::error::AppError;
use notehub_database::repositories::note::NoteRepository;
use notehub_entity::note::{CreateNote, Note, UpdateNote};

/// Request to create a new note.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateNoteRequest {
    /// Owning user (None for anonymous creation).
    pub user_id: Option<i64>,
    /// Title; defaults to "Untitled" when absent.
    pub title: Option<String>,
    /// Markdown content, required.
    pub content: Option<String>,
    /// Opaque metadata map.
    pub metadata: Option<serde_json::Value>,
}

/// Manages note creation, lookup, update, and listing.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(note_repo: Arc<NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Creates a new note. Content is required; the title defaults to
    /// "Untitled" and metadata to an empty map.
    pub async fn create_note(&self, req: CreateNoteRequest) -> Result<Note, AppError> {
        let content = match req.content {
            Some(content) if !content.is_empty() => content,
            _ => return Err(AppError::validation("Content is required")),
        };

        let data = CreateNote {
            user_id: req.user_id,
            title: req
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Untitled".to_string()),
            content,
            metadata: req
                .metadata
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
        };

        let note = self.note_repo.insert(&data).await?;
        info!(note_id = note.id, "Note created");
        Ok(note)
    }

    /// Fetches a note by id.
    pub async fn get_note(&self, id: i64) -> Result<Note, AppError> {
        self.note_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Applies a partial update; title/content replace, metadata merges.
    pub async fn update_note(&self, id: i64, update: UpdateNote) -> Result<Note, AppError> {
        let note = self
            .note_repo
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))?;
        info!(note_id = note.id, "Note updated");
        Ok(note)
    }

    /// Lists notes, most recently updated first.
    pub async fn list_notes(&self, limit: i64) -> Result<Vec<Note>, AppError> {
        self.note_repo.list_recent(limit).await
    }
}
