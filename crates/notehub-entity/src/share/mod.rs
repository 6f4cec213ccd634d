//! Share entity — links a note to a public short code.

pub mod model;

pub use model::{CreateShare, Share};
