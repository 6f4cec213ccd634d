//! Notehub Server — Markdown notes with shareable links
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use notehub_core::config::AppConfig;
use notehub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("NOTEHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Notehub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = notehub_database::connection::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    notehub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(notehub_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let note_repo = Arc::new(notehub_database::repositories::note::NoteRepository::new(
        db_pool.clone(),
    ));
    let share_repo = Arc::new(notehub_database::repositories::share::ShareRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Auth & viewer sessions ───────────────────────────
    let password_hasher = Arc::new(notehub_auth::password::PasswordHasher::new());
    let sessions = Arc::new(notehub_auth::session::SessionStore::new(Duration::from_secs(
        config.session.idle_timeout_minutes * 60,
    )));

    let sweeper = notehub_auth::session::SessionSweeper::new(
        Arc::clone(&sessions),
        Duration::from_secs(config.session.cleanup_interval_minutes * 60),
    );
    tokio::spawn(sweeper.run());

    // ── Step 4: Services ─────────────────────────────────────────
    let note_service = Arc::new(notehub_service::note::NoteService::new(Arc::clone(
        &note_repo,
    )));
    let share_service = Arc::new(notehub_service::share::ShareService::new(
        Arc::clone(&share_repo),
        Arc::clone(&password_hasher),
        notehub_service::share::CodeGenerator::new(config.auth.share_code_length),
        config.auth.share_code_retries,
    ));
    let access_service = Arc::new(notehub_service::share::AccessService::new(
        Arc::clone(&share_repo),
        Arc::clone(&note_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&sessions),
    ));
    let user_service = Arc::new(notehub_service::user::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        config.auth.password_min_length,
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let addr = config.server.bind_addr();

    let app_state = notehub_api::state::AppState {
        // Configuration
        config: Arc::new(config),

        // Infrastructure
        db_pool: db_pool.clone(),

        // Auth & sessions
        password_hasher: Arc::clone(&password_hasher),
        sessions: Arc::clone(&sessions),

        // Repositories
        user_repo: Arc::clone(&user_repo),
        note_repo: Arc::clone(&note_repo),
        share_repo: Arc::clone(&share_repo),

        // Services
        note_service,
        share_service,
        access_service,
        user_service,
    };

    let app = notehub_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Notehub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    tracing::info!("Notehub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::error!("Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => {
                tracing::error!("Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
