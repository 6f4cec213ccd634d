//! Share access gating — the view/unlock state machine.
//!
//! A view request resolves to exactly one of: NotFound, Expired,
//! Challenge (password form, no content, no view counted), or Render
//! (content plus exactly one view-counter increment). An unlock request
//! resolves to NotFound, UnlockOk, or AuthDenied. Gating runs before
//! note content is ever fetched, so a request that ends in Challenge
//! never loads the note.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use notehub_auth::password::PasswordHasher;
use notehub_auth::session::SessionStore;
use notehub_core::error::AppError;
use notehub_database::repositories::note::NoteRepository;
use notehub_database::repositories::share::ShareRepository;
use notehub_entity::note::Note;
use notehub_entity::share::Share;

use crate::note::markdown;

/// Terminal outcome of a view request that found a live share.
#[derive(Debug, Clone)]
pub enum ViewOutcome {
    /// The share is open to this viewer: note content renders and one
    /// view was counted.
    Render {
        /// The share record after the counter increment.
        share: Share,
        /// The underlying note.
        note: Note,
        /// The note content rendered to HTML.
        html: String,
    },
    /// The share is password-protected and this session has not
    /// unlocked it: render a password challenge, count nothing.
    Challenge {
        /// The share record (content stays unfetched).
        share: Share,
    },
}

/// Whether a share's gate is open for a particular viewer right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// No password, or this session already unlocked it.
    Open,
    /// Password set and not yet unlocked by this session.
    Locked,
}

/// Decides the gate state for one view request.
///
/// Pure function of (share record, unlock membership, current time) so
/// the state machine is testable without a store or session layer.
/// Expiry is checked first: a previously-unlocked session does not
/// bypass an expired share.
pub fn evaluate_gate(share: &Share, unlocked: bool, now: DateTime<Utc>) -> Result<Gate, AppError> {
    if share.is_expired_at(now) {
        return Err(AppError::expired("Share link has expired"));
    }
    if !share.has_password() || unlocked {
        Ok(Gate::Open)
    } else {
        Ok(Gate::Locked)
    }
}

/// Orchestrates view and unlock requests against the share registry,
/// the viewer session store, and the note store.
#[derive(Debug, Clone)]
pub struct AccessService {
    /// Share repository.
    share_repo: Arc<ShareRepository>,
    /// Note repository, consulted only after the gate opens.
    note_repo: Arc<NoteRepository>,
    /// Password hasher for unlock verification.
    hasher: Arc<PasswordHasher>,
    /// Viewer session store holding unlock state.
    sessions: Arc<SessionStore>,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(
        share_repo: Arc<ShareRepository>,
        note_repo: Arc<NoteRepository>,
        hasher: Arc<PasswordHasher>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            share_repo,
            note_repo,
            hasher,
            sessions,
        }
    }

    /// Resolves a view request for a share code.
    ///
    /// Only a Render outcome increments the view counter, and the
    /// increment is atomic with a re-check of expiry in the store, so a
    /// share expiring between lookup and increment resolves to Expired
    /// with the counter untouched. A share whose note has been deleted
    /// resolves to NotFound, also without counting.
    pub async fn view(&self, viewer: Uuid, code: &str) -> Result<ViewOutcome, AppError> {
        let share = self
            .share_repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Share not found"))?;

        let unlocked = self.sessions.is_unlocked(viewer, share.id);

        match evaluate_gate(&share, unlocked, Utc::now())? {
            Gate::Locked => {
                debug!(share_id = share.id, "Password challenge presented");
                Ok(ViewOutcome::Challenge { share })
            }
            Gate::Open => {
                let note = self
                    .note_repo
                    .find_by_id(share.note_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Note not found"))?;

                let share = self
                    .share_repo
                    .record_view(share.id)
                    .await?
                    .ok_or_else(|| AppError::expired("Share link has expired"))?;

                let html = markdown::render_html(&note.content);

                debug!(share_id = share.id, views = share.views, "Share rendered");
                Ok(ViewOutcome::Render { share, note, html })
            }
        }
    }

    /// Resolves an unlock submission for a share code.
    ///
    /// A share with no password unlocks trivially (nothing to verify,
    /// nothing recorded). A matching password marks the share unlocked
    /// for this session; a mismatch changes no state. The response only
    /// ever conveys match/no-match.
    pub async fn unlock(&self, viewer: Uuid, code: &str, password: &str) -> Result<(), AppError> {
        let share = self
            .share_repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Share not found"))?;

        let Some(hash) = share.password_hash.clone() else {
            return Ok(());
        };

        // Argon2 verification is CPU-bound by design; keep it off the
        // request executor.
        let hasher = Arc::clone(&self.hasher);
        let submitted = password.to_string();
        let matches =
            tokio::task::spawn_blocking(move || hasher.verify_password(&submitted, &hash))
                .await
                .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))??;

        if !matches {
            return Err(AppError::authentication("Wrong password"));
        }

        self.sessions.mark_unlocked(viewer, share.id);
        info!(share_id = share.id, "Share unlocked for session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use notehub_core::error::ErrorKind;

    use super::*;

    fn share(expires_at: Option<DateTime<Utc>>, password_hash: Option<&str>) -> Share {
        Share {
            id: 1,
            note_id: 7,
            share_code: "a1b2c3d4e5".to_string(),
            password_hash: password_hash.map(String::from),
            expires_at,
            views: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_open_without_password() {
        let s = share(None, None);
        assert_eq!(evaluate_gate(&s, false, Utc::now()).unwrap(), Gate::Open);
    }

    #[test]
    fn test_locked_with_password_before_unlock() {
        let s = share(None, Some("$argon2id$..."));
        // Stays locked no matter how many times it is evaluated.
        for _ in 0..3 {
            assert_eq!(evaluate_gate(&s, false, Utc::now()).unwrap(), Gate::Locked);
        }
    }

    #[test]
    fn test_open_with_password_after_unlock() {
        let s = share(None, Some("$argon2id$..."));
        assert_eq!(evaluate_gate(&s, true, Utc::now()).unwrap(), Gate::Open);
    }

    #[test]
    fn test_expired_is_terminal() {
        let now = Utc::now();
        let s = share(Some(now - Duration::seconds(1)), None);
        let err = evaluate_gate(&s, false, now).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Expired);
    }

    #[test]
    fn test_prior_unlock_does_not_bypass_expiry() {
        let now = Utc::now();
        let s = share(Some(now - Duration::seconds(1)), Some("$argon2id$..."));
        let err = evaluate_gate(&s, true, now).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Expired);
    }

    #[test]
    fn test_unexpired_future_expiry_is_open() {
        let now = Utc::now();
        let s = share(Some(now + Duration::hours(1)), None);
        assert_eq!(evaluate_gate(&s, false, now).unwrap(), Gate::Open);
    }
}
