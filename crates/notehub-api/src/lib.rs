//! # notehub-api
//!
//! HTTP API layer for Notehub built on Axum.
//!
//! Provides the JSON API (notes, shares, auth), the human-facing share
//! pages, the viewer-session cookie plumbing, middleware, and the
//! mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
