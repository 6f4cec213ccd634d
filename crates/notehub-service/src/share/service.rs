//! Share lifecycle service — creation and metadata lookup.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use notehub_auth::password::PasswordHasher;
use notehub_core::error::{AppError, ErrorKind};
use notehub_database::repositories::share::ShareRepository;
use notehub_entity::share::{CreateShare, Share};

use super::code::CodeGenerator;

/// Request to create a new share.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateShareRequest {
    /// The note to share.
    pub note_id: i64,
    /// Optional plaintext password gating the share. Hashed immediately;
    /// the plaintext is never persisted or logged.
    pub password: Option<String>,
    /// Optional lifetime in hours, fractional allowed. Absent or zero
    /// means the share never expires.
    pub expires_in_hours: Option<f64>,
}

/// Manages share record creation and metadata lookup.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share repository.
    share_repo: Arc<ShareRepository>,
    /// Password hasher for password-protected shares.
    hasher: Arc<PasswordHasher>,
    /// Share code generator.
    codes: CodeGenerator,
    /// Collision retry budget for share-code generation.
    code_retries: u32,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        share_repo: Arc<ShareRepository>,
        hasher: Arc<PasswordHasher>,
        codes: CodeGenerator,
        code_retries: u32,
    ) -> Self {
        Self {
            share_repo,
            hasher,
            codes,
            code_retries,
        }
    }

    /// Creates a new share for an existing note.
    ///
    /// Fails with NotFound when the note does not exist (the insert is
    /// conditional on note existence, so no record is ever created for a
    /// missing note). A share-code uniqueness collision regenerates the
    /// code and retries a bounded number of times; any other store
    /// failure propagates without a retry.
    pub async fn create_share(&self, req: CreateShareRequest) -> Result<Share, AppError> {
        let password_hash = match req.password {
            Some(password) if !password.is_empty() => {
                let hasher = Arc::clone(&self.hasher);
                Some(
                    tokio::task::spawn_blocking(move || hasher.hash_password(&password))
                        .await
                        .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))??,
                )
            }
            _ => None,
        };

        let expires_at = expires_at_from(req.expires_in_hours, Utc::now())?;

        let mut attempts = 0u32;
        loop {
            let data = CreateShare {
                note_id: req.note_id,
                share_code: self.codes.generate(),
                password_hash: password_hash.clone(),
                expires_at,
            };

            match self.share_repo.insert(&data).await {
                Ok(Some(share)) => {
                    info!(
                        share_id = share.id,
                        note_id = share.note_id,
                        share_code = %share.share_code,
                        has_password = share.has_password(),
                        expires_at = ?share.expires_at,
                        "Share created"
                    );
                    return Ok(share);
                }
                Ok(None) => {
                    return Err(AppError::not_found("Note not found"));
                }
                Err(e) if e.kind == ErrorKind::Conflict && attempts < self.code_retries => {
                    attempts += 1;
                    warn!(attempts, "Share code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Looks up share metadata by code.
    ///
    /// Pure lookup: never touches the view counter. An expired share
    /// reports Expired so callers can tell "link expired" apart from
    /// "link never existed".
    pub async fn metadata(&self, code: &str) -> Result<Share, AppError> {
        let share = self
            .share_repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Share not found"))?;

        if share.is_expired() {
            return Err(AppError::expired("Share link has expired"));
        }

        Ok(share)
    }
}

/// Computes the absolute expiry time from an optional hour count.
///
/// Fractional hours are allowed; `None` and non-positive values mean the
/// share never expires. NaN, infinities, and counts that would push the
/// expiry past the representable timestamp range are rejected rather
/// than silently clamped: the input is caller-supplied JSON.
pub fn expires_at_from(
    hours: Option<f64>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    match hours {
        None => Ok(None),
        Some(h) if !h.is_finite() => Err(AppError::validation(
            "expires_in_hours must be a finite number",
        )),
        Some(h) if h <= 0.0 => Ok(None),
        Some(h) => {
            // The cast saturates for huge counts; checked addition turns
            // the resulting out-of-range expiry into an error instead of
            // a panic.
            let delta = Duration::milliseconds((h * 3_600_000.0) as i64);
            now.checked_add_signed(delta)
                .map(Some)
                .ok_or_else(|| AppError::validation("expires_in_hours is too large"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_hours_never_expires() {
        assert_eq!(expires_at_from(None, Utc::now()).unwrap(), None);
    }

    #[test]
    fn test_zero_hours_never_expires() {
        assert_eq!(expires_at_from(Some(0.0), Utc::now()).unwrap(), None);
    }

    #[test]
    fn test_whole_hours() {
        let now = Utc::now();
        let expires = expires_at_from(Some(24.0), now).unwrap().unwrap();
        assert_eq!(expires - now, Duration::hours(24));
    }

    #[test]
    fn test_fractional_hours() {
        let now = Utc::now();
        let expires = expires_at_from(Some(0.5), now).unwrap().unwrap();
        assert_eq!(expires - now, Duration::minutes(30));
    }

    #[test]
    fn test_huge_hours_rejected_not_panicking() {
        let err = expires_at_from(Some(1.0e12), Utc::now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_infinite_hours_rejected() {
        let err = expires_at_from(Some(f64::INFINITY), Utc::now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_nan_hours_rejected() {
        let err = expires_at_from(Some(f64::NAN), Utc::now()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
