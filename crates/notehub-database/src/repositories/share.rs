//! Share repository implementation.

use sqlx::PgPool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::share::{CreateShare, Share};

use super::is_unique_violation;

/// Repository for share record persistence and code lookup.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    pool: PgPool,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new share record.
    ///
    /// The note existence check and the insert run in one statement so a
    /// share can never be created against a note that vanished between a
    /// caller-side check and the insert. Returns `Ok(None)` when the note
    /// does not exist; a `share_code` uniqueness violation maps to
    /// [`ErrorKind::Conflict`] so the service layer can regenerate the code.
    pub async fn insert(&self, data: &CreateShare) -> AppResult<Option<Share>> {
        sqlx::query_as::<_, Share>(
            "INSERT INTO shares (note_id, share_code, password_hash, expires_at) \
             SELECT id, $2, $3, $4 FROM notes WHERE id = $1 \
             RETURNING *",
        )
        .bind(data.note_id)
        .bind(&data.share_code)
        .bind(&data.password_hash)
        .bind(data.expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::with_source(ErrorKind::Conflict, "Share code already exists", e)
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create share", e)
            }
        })
    }

    /// Find a share by its public code. Pure lookup; never mutates.
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<Share>> {
        sqlx::query_as::<_, Share>("SELECT * FROM shares WHERE share_code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find share by code", e)
            })
    }

    /// Count one content view against a share.
    ///
    /// The increment and the expiry check are a single atomic statement:
    /// no row comes back when the share expired (or was deleted) between
    /// lookup and increment, and the counter is never bumped for a
    /// request that did not render content. Never read-modify-write.
    pub async fn record_view(&self, share_id: i64) -> AppResult<Option<Share>> {
        sqlx::query_as::<_, Share>(
            "UPDATE shares SET views = views + 1 \
             WHERE id = $1 AND (expires_at IS NULL OR expires_at > NOW()) \
             RETURNING *",
        )
        .bind(share_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record view", e))
    }
}
