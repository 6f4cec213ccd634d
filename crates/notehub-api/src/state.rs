//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use notehub_auth::password::PasswordHasher;
use notehub_auth::session::SessionStore;
use notehub_core::config::AppConfig;

use notehub_database::repositories::note::NoteRepository;
use notehub_database::repositories::share::ShareRepository;
use notehub_database::repositories::user::UserRepository;

use notehub_service::note::NoteService;
use notehub_service::share::{AccessService, ShareService};
use notehub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth & sessions ──────────────────────────────────────
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Viewer session store (unlock state, login binding)
    pub sessions: Arc<SessionStore>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Note repository
    pub note_repo: Arc<NoteRepository>,
    /// Share repository
    pub share_repo: Arc<ShareRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Note service
    pub note_service: Arc<NoteService>,
    /// Share lifecycle service
    pub share_service: Arc<ShareService>,
    /// Share access resolver
    pub access_service: Arc<AccessService>,
    /// User account service
    pub user_service: Arc<UserService>,
}
