//! User entity — a registered viewer identity.

pub mod model;

pub use model::{CreateUser, User};
