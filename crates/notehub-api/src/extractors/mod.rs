//! Request extractors and session plumbing.

pub mod session;

pub use session::resolve_viewer;
