//! Viewer session cookie resolution.
//!
//! The session id is an opaque UUID carried in an HttpOnly cookie. The
//! id means nothing on its own; all session state (login binding,
//! unlocked share ids) lives server-side in the `SessionStore`.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::state::AppState;

/// Resolves the viewer session for a request.
///
/// Returns the live session id and a jar that carries a `Set-Cookie`
/// when a fresh session was minted (unknown, expired, or malformed
/// cookies all mint fresh — a stale cookie must not resurrect evicted
/// unlock state). Handlers return the jar so the cookie reaches the
/// client.
pub fn resolve_viewer(state: &AppState, jar: CookieJar) -> (Uuid, CookieJar) {
    let cookie_name = state.config.session.cookie_name.clone();

    if let Some(existing) = jar.get(&cookie_name) {
        if let Ok(session_id) = existing.value().parse::<Uuid>() {
            if state.sessions.touch(session_id) {
                return (session_id, jar);
            }
        }
    }

    let session_id = state.sessions.create();
    let cookie = Cookie::build((cookie_name, session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (session_id, jar.add(cookie))
}
