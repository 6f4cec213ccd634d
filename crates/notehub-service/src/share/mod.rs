//! Share management — create, look up, and gate access to shared notes.

pub mod access;
pub mod code;
pub mod service;

pub use access::{AccessService, ViewOutcome};
pub use code::CodeGenerator;
pub use service::ShareService;
