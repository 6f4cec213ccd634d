//! Note management — CRUD and Markdown rendering.

pub mod markdown;
pub mod service;

pub use service::NoteService;
