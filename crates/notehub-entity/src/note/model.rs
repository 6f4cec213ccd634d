//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A Markdown note.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique note identifier.
    pub id: i64,
    /// Owning user, if the note was created by a logged-in client.
    pub user_id: Option<i64>,
    /// Note title.
    pub title: String,
    /// Raw Markdown content.
    pub content: String,
    /// Opaque string-keyed metadata, round-tripped verbatim. The core
    /// never interprets its contents except for display.
    pub metadata: serde_json::Value,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    /// Owning user (optional).
    pub user_id: Option<i64>,
    /// Title. Callers default this to "Untitled" when absent.
    pub title: String,
    /// Markdown content.
    pub content: String,
    /// Opaque metadata map.
    pub metadata: serde_json::Value,
}

/// Partial update for an existing note.
///
/// `title` and `content` replace the stored value when present;
/// `metadata` is merged key-by-key into the stored map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNote {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// Metadata entries to merge in.
    pub metadata: Option<serde_json::Value>,
}
