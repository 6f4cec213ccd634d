//! Integration tests for view counting against a real PostgreSQL.
//!
//! The counter lives in a single conditional UPDATE, so its guarantees
//! (one increment per render, zero for challenge, expired, and missing
//! outcomes) can only be observed through the store. These tests need a
//! running PostgreSQL and are ignored by default; point `DATABASE_URL`
//! at a scratch database and run with `cargo test -- --ignored`.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;

use notehub_auth::password::PasswordHasher;
use notehub_auth::session::SessionStore;
use notehub_core::config::database::DatabaseConfig;
use notehub_core::error::ErrorKind;
use notehub_database::repositories::note::NoteRepository;
use notehub_database::repositories::share::ShareRepository;
use notehub_entity::note::CreateNote;
use notehub_entity::share::{CreateShare, Share};
use notehub_service::share::{AccessService, CodeGenerator, ViewOutcome};

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must point at a scratch PostgreSQL database");

    let config = DatabaseConfig {
        url,
        max_connections: 5,
        min_connections: 1,
        connect_timeout_seconds: 10,
        idle_timeout_seconds: 60,
    };

    let pool = notehub_database::connection::connect(&config)
        .await
        .expect("Failed to connect to test database");
    notehub_database::migration::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

struct TestCtx {
    pool: PgPool,
    notes: Arc<NoteRepository>,
    shares: Arc<ShareRepository>,
    sessions: Arc<SessionStore>,
    access: AccessService,
}

impl TestCtx {
    async fn new() -> Self {
        let pool = test_pool().await;
        let notes = Arc::new(NoteRepository::new(pool.clone()));
        let shares = Arc::new(ShareRepository::new(pool.clone()));
        let hasher = Arc::new(PasswordHasher::new());
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(3600)));
        let access = AccessService::new(
            Arc::clone(&shares),
            Arc::clone(&notes),
            hasher,
            Arc::clone(&sessions),
        );
        Self {
            pool,
            notes,
            shares,
            sessions,
            access,
        }
    }

    async fn create_note(&self) -> i64 {
        self.notes
            .insert(&CreateNote {
                user_id: None,
                title: "Counting test".to_string(),
                content: "# Hello".to_string(),
                metadata: serde_json::json!({}),
            })
            .await
            .expect("Failed to create note")
            .id
    }

    async fn create_share(
        &self,
        note_id: i64,
        password_hash: Option<String>,
        expires_at: Option<chrono::DateTime<Utc>>,
    ) -> Share {
        self.shares
            .insert(&CreateShare {
                note_id,
                share_code: CodeGenerator::new(10).generate(),
                password_hash,
                expires_at,
            })
            .await
            .expect("Failed to insert share")
            .expect("Note should exist")
    }

    async fn views_of(&self, code: &str) -> i64 {
        self.shares
            .find_by_code(code)
            .await
            .expect("Lookup failed")
            .expect("Share should exist")
            .views
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_each_render_counts_exactly_once() {
    let ctx = TestCtx::new().await;
    let note_id = ctx.create_note().await;
    let share = ctx.create_share(note_id, None, None).await;
    let viewer = ctx.sessions.create();

    for expected in 1..=3 {
        let outcome = ctx
            .access
            .view(viewer, &share.share_code)
            .await
            .expect("View should render");
        match outcome {
            ViewOutcome::Render { share, .. } => assert_eq!(share.views, expected),
            ViewOutcome::Challenge { .. } => panic!("Open share must not challenge"),
        }
    }

    assert_eq!(ctx.views_of(&share.share_code).await, 3);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_challenge_does_not_count_but_unlocked_render_does() {
    let ctx = TestCtx::new().await;
    let note_id = ctx.create_note().await;
    let hash = PasswordHasher::new()
        .hash_password("secret1")
        .expect("Hashing failed");
    let share = ctx.create_share(note_id, Some(hash), None).await;
    let viewer = ctx.sessions.create();

    for _ in 0..3 {
        match ctx
            .access
            .view(viewer, &share.share_code)
            .await
            .expect("View should challenge")
        {
            ViewOutcome::Challenge { .. } => {}
            ViewOutcome::Render { .. } => panic!("Locked share must not render"),
        }
    }
    assert_eq!(ctx.views_of(&share.share_code).await, 0);

    ctx.access
        .unlock(viewer, &share.share_code, "secret1")
        .await
        .expect("Unlock should succeed");

    match ctx
        .access
        .view(viewer, &share.share_code)
        .await
        .expect("View should render after unlock")
    {
        ViewOutcome::Render { share, .. } => assert_eq!(share.views, 1),
        ViewOutcome::Challenge { .. } => panic!("Unlocked share must not challenge"),
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_expired_view_leaves_counter_untouched() {
    let ctx = TestCtx::new().await;
    let note_id = ctx.create_note().await;
    let expired = Utc::now() - chrono::Duration::hours(1);
    let share = ctx.create_share(note_id, None, Some(expired)).await;
    let viewer = ctx.sessions.create();

    let err = ctx
        .access
        .view(viewer, &share.share_code)
        .await
        .expect_err("Expired share must not render");
    assert_eq!(err.kind, ErrorKind::Expired);
    assert_eq!(ctx.views_of(&share.share_code).await, 0);

    // The conditional UPDATE itself also refuses the increment.
    let updated = ctx
        .shares
        .record_view(share.id)
        .await
        .expect("record_view query failed");
    assert!(updated.is_none());
    assert_eq!(ctx.views_of(&share.share_code).await, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_deleted_note_view_does_not_count() {
    let ctx = TestCtx::new().await;
    let note_id = ctx.create_note().await;
    let share = ctx.create_share(note_id, None, None).await;
    let viewer = ctx.sessions.create();

    sqlx::query("DELETE FROM notes WHERE id = $1")
        .bind(note_id)
        .execute(&ctx.pool)
        .await
        .expect("Failed to delete note");

    let err = ctx
        .access
        .view(viewer, &share.share_code)
        .await
        .expect_err("Dangling share must not render");
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(ctx.views_of(&share.share_code).await, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn test_share_for_missing_note_is_never_created() {
    let ctx = TestCtx::new().await;

    let inserted = ctx
        .shares
        .insert(&CreateShare {
            note_id: i64::MAX,
            share_code: CodeGenerator::new(10).generate(),
            password_hash: None,
            expires_at: None,
        })
        .await
        .expect("Insert query failed");
    assert!(inserted.is_none());
}
