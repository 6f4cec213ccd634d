//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notehub_entity::note::Note;
use notehub_entity::share::Share;
use notehub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Note representation, including the human view URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    /// Note ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Raw Markdown content.
    pub content: String,
    /// Opaque metadata map.
    pub metadata: serde_json::Value,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
    /// Absolute URL of the note's rendered page.
    pub url: String,
}

impl NoteResponse {
    /// Builds a response from an entity plus its public URL.
    pub fn from_note(note: Note, url: String) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            metadata: note.metadata,
            created_at: note.created_at,
            updated_at: note.updated_at,
            url,
        }
    }
}

/// Response to share creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareCreatedResponse {
    /// Share record ID.
    pub id: i64,
    /// Public share code.
    pub share_code: String,
    /// Absolute shareable URL.
    pub share_url: String,
}

/// Share metadata, exposed without the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareMetaResponse {
    /// Share record ID.
    pub id: i64,
    /// Public share code.
    pub share_code: String,
    /// Whether a password gates this share.
    pub has_password: bool,
    /// Expiry time, if any.
    pub expires_at: Option<DateTime<Utc>>,
    /// Completed content renders.
    pub views: i64,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Share> for ShareMetaResponse {
    fn from(share: Share) -> Self {
        Self {
            id: share.id,
            share_code: share.share_code.clone(),
            has_password: share.has_password(),
            expires_at: share.expires_at,
            views: share.views,
            created_at: share.created_at,
        }
    }
}

/// Response to an unlock submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockResponse {
    /// Always true on the success path; failures use the error body.
    pub success: bool,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_meta_hides_hash_and_reports_gate() {
        let share = Share {
            id: 3,
            note_id: 9,
            share_code: "zz00zz00zz".to_string(),
            password_hash: Some("$argon2id$...".to_string()),
            expires_at: None,
            views: 5,
            created_at: Utc::now(),
        };

        let meta = ShareMetaResponse::from(share);
        assert!(meta.has_password);
        assert_eq!(meta.views, 5);

        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
