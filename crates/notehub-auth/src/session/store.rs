//! In-memory viewer session store.
//!
//! A viewer session is ephemeral, scoped to one browser, and never
//! persisted: it carries an optional logged-in user id and the set of
//! share ids that have passed password verification this session.
//! Unlock state only ever grows; there is no re-lock operation. The
//! whole session disappears on logout or idle eviction.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

/// One viewer's ephemeral session.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    /// Opaque session identifier, carried in a cookie.
    pub id: Uuid,
    /// Registered user bound to this session, if logged in.
    pub user_id: Option<i64>,
    /// Share ids unlocked by correct password entry this session.
    unlocked_shares: HashSet<i64>,
    /// Last request time, for idle eviction.
    last_seen: Instant,
}

impl ViewerSession {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            user_id: None,
            unlocked_shares: HashSet::new(),
            last_seen: Instant::now(),
        }
    }
}

/// Concurrent map of live viewer sessions.
///
/// All mutation is per-entry through dashmap shards, so concurrent
/// requests for the same session are safe without external locking;
/// the unlock insert is idempotent by construction.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, ViewerSession>,
    idle_timeout: Duration,
}

impl SessionStore {
    /// Creates a store that evicts sessions idle longer than `idle_timeout`.
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    /// Creates a fresh, empty session and returns its id.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, ViewerSession::new(id));
        id
    }

    /// Returns true when the session exists, refreshing its idle clock.
    pub fn touch(&self, session_id: Uuid) -> bool {
        match self.sessions.get_mut(&session_id) {
            Some(mut session) => {
                session.last_seen = Instant::now();
                true
            }
            None => false,
        }
    }

    /// True iff this session has unlocked the given share id.
    pub fn is_unlocked(&self, session_id: Uuid, share_id: i64) -> bool {
        self.sessions
            .get(&session_id)
            .map(|s| s.unlocked_shares.contains(&share_id))
            .unwrap_or(false)
    }

    /// Marks a share as unlocked for this session. Idempotent: marking
    /// twice has no additional effect.
    pub fn mark_unlocked(&self, session_id: Uuid, share_id: i64) {
        if let Some(mut session) = self.sessions.get_mut(&session_id) {
            session.unlocked_shares.insert(share_id);
            session.last_seen = Instant::now();
        }
    }

    /// Binds a logged-in user to this session.
    pub fn bind_user(&self, session_id: Uuid, user_id: i64) {
        if let Some(mut session) = self.sessions.get_mut(&session_id) {
            session.user_id = Some(user_id);
            session.last_seen = Instant::now();
        }
    }

    /// Returns the user bound to this session, if any.
    pub fn user_id(&self, session_id: Uuid) -> Option<i64> {
        self.sessions.get(&session_id).and_then(|s| s.user_id)
    }

    /// Destroys a session and all its unlock state.
    pub fn remove(&self, session_id: Uuid) {
        self.sessions.remove(&session_id);
    }

    /// Evicts sessions idle longer than the configured timeout.
    /// Returns the number of evicted sessions.
    pub fn sweep(&self) -> usize {
        let before = self.sessions.len();
        let cutoff = self.idle_timeout;
        self.sessions
            .retain(|_, session| session.last_seen.elapsed() < cutoff);
        before - self.sessions.len()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store has no live sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(3600))
    }

    #[test]
    fn test_new_session_has_nothing_unlocked() {
        let store = store();
        let session = store.create();
        assert!(!store.is_unlocked(session, 1));
        assert_eq!(store.user_id(session), None);
    }

    #[test]
    fn test_mark_unlocked_is_idempotent() {
        let store = store();
        let session = store.create();

        store.mark_unlocked(session, 42);
        assert!(store.is_unlocked(session, 42));

        // Second unlock must not change observable state.
        store.mark_unlocked(session, 42);
        assert!(store.is_unlocked(session, 42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unlock_is_scoped_to_session() {
        let store = store();
        let a = store.create();
        let b = store.create();

        store.mark_unlocked(a, 42);
        assert!(store.is_unlocked(a, 42));
        assert!(!store.is_unlocked(b, 42));
    }

    #[test]
    fn test_unlock_is_scoped_to_share() {
        let store = store();
        let session = store.create();

        store.mark_unlocked(session, 42);
        assert!(!store.is_unlocked(session, 43));
    }

    #[test]
    fn test_unknown_session_is_never_unlocked() {
        let store = store();
        assert!(!store.is_unlocked(Uuid::new_v4(), 42));
        // Marking an unknown session is a no-op rather than a resurrection.
        let ghost = Uuid::new_v4();
        store.mark_unlocked(ghost, 42);
        assert!(!store.is_unlocked(ghost, 42));
    }

    #[test]
    fn test_remove_destroys_unlock_state() {
        let store = store();
        let session = store.create();
        store.mark_unlocked(session, 42);

        store.remove(session);
        assert!(!store.is_unlocked(session, 42));
        assert!(!store.touch(session));
    }

    #[test]
    fn test_bind_user() {
        let store = store();
        let session = store.create();
        store.bind_user(session, 7);
        assert_eq!(store.user_id(session), Some(7));
    }

    #[test]
    fn test_sweep_evicts_idle_sessions() {
        let store = SessionStore::new(Duration::ZERO);
        store.create();
        store.create();
        assert_eq!(store.sweep(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_sweep_keeps_active_sessions() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let session = store.create();
        assert_eq!(store.sweep(), 0);
        assert!(store.touch(session));
    }
}
