//! # notehub-auth
//!
//! Credential hashing and viewer session state for Notehub.
//!
//! The [`password`] module wraps Argon2id hashing for both account and
//! share passwords. The [`session`] module owns the ephemeral per-viewer
//! state: an opaque session id, an optional logged-in user, and the set
//! of share ids the viewer has unlocked this session.

pub mod password;
pub mod session;

pub use password::PasswordHasher;
pub use session::SessionStore;
