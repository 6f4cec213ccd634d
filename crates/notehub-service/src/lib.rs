//! # notehub-service
//!
//! Business logic services for Notehub. Services orchestrate
//! repositories, the password hasher, and the viewer session store;
//! HTTP concerns stay in `notehub-api`.

pub mod note;
pub mod share;
pub mod user;
