//! Route definitions for the Notehub HTTP surface.
//!
//! JSON endpoints are organized by domain and mounted under `/api`;
//! the human-facing pages live at the root. The router receives
//! `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(note_routes())
        .merge(share_routes())
        .merge(auth_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Note CRUD endpoints
fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", post(handlers::note::create_note))
        .route("/notes", get(handlers::note::list_notes))
        .route("/notes/{id}", get(handlers::note::get_note))
        .route("/notes/{id}", put(handlers::note::update_note))
}

/// Share lifecycle and unlock endpoints
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares", post(handlers::share::create_share))
        .route("/shares/{code}", get(handlers::share::get_share_meta))
        .route("/shares/{code}/unlock", post(handlers::share::unlock_share))
}

/// Account endpoints: register, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Human-facing HTML pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/note/{id}", get(handlers::pages::view_note))
        .route("/share/{code}", get(handlers::pages::view_share))
}
