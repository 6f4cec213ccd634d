//! # notehub-core
//!
//! Core configuration schemas, the unified error type, and the shared
//! result alias for Notehub. Every other crate in the workspace depends
//! on this one and maps its failures into [`error::AppError`].

pub mod config;
pub mod error;
pub mod result;
