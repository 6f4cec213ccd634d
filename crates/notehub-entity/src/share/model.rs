//! Share entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A share record granting public access to a single note via a short code.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Share {
    /// Unique share identifier, assigned by the store.
    pub id: i64,
    /// The note this share exposes. Deleting the note does not cascade:
    /// a dangling reference resolves to not-found at view time.
    pub note_id: i64,
    /// Public-facing short code, unique across all shares.
    pub share_code: String,
    /// Argon2 hash of the share password. Absent means the share is
    /// publicly viewable with no gate. Plaintext is never stored.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// Absolute expiry time. Absent means the share never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// Number of completed content renders through this share.
    pub views: i64,
    /// When the share was created.
    pub created_at: DateTime<Utc>,
}

impl Share {
    /// Whether the share requires a password before rendering content.
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Whether the share is expired at the given instant.
    ///
    /// Expiry is terminal for viewing: once past `expires_at` the share
    /// never renders content again, regardless of prior unlock state.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }

    /// Whether the share is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Data required to create a new share record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShare {
    /// The note being shared.
    pub note_id: i64,
    /// Generated public code.
    pub share_code: String,
    /// Pre-hashed password (None = no gate).
    pub password_hash: Option<String>,
    /// Expiry time (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn share(expires_at: Option<DateTime<Utc>>, password_hash: Option<String>) -> Share {
        Share {
            id: 1,
            note_id: 7,
            share_code: "a1b2c3d4e5".to_string(),
            password_hash,
            expires_at,
            views: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_never_expires_without_expiry() {
        assert!(!share(None, None).is_expired());
    }

    #[test]
    fn test_expired_when_past() {
        let s = share(Some(Utc::now() - Duration::hours(1)), None);
        assert!(s.is_expired());
    }

    #[test]
    fn test_not_expired_when_future() {
        let s = share(Some(Utc::now() + Duration::hours(1)), None);
        assert!(!s.is_expired());
    }

    #[test]
    fn test_boundary_counts_as_expired() {
        let now = Utc::now();
        let s = share(Some(now), None);
        assert!(s.is_expired_at(now));
    }

    #[test]
    fn test_has_password() {
        assert!(share(None, Some("$argon2id$...".to_string())).has_password());
        assert!(!share(None, None).has_password());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let s = share(None, Some("$argon2id$secret".to_string()));
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["share_code"], "a1b2c3d4e5");
    }
}
