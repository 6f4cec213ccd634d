//! Note entity — a Markdown document with opaque metadata.

pub mod model;

pub use model::{CreateNote, Note, UpdateNote};
