//! Viewer session state — unlock tracking and login binding.

pub mod store;
pub mod sweeper;

pub use store::SessionStore;
pub use sweeper::SessionSweeper;
