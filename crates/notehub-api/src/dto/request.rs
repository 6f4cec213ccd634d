//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create note request body.
///
/// `content` is optional at the serde level so that a missing field
/// surfaces as a 400 validation error rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    /// Title; defaults to "Untitled".
    pub title: Option<String>,
    /// Markdown content (required).
    pub content: Option<String>,
    /// Opaque metadata map.
    pub metadata: Option<serde_json::Value>,
}

/// Update note request body. All fields optional; metadata merges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// Metadata entries to merge in.
    pub metadata: Option<serde_json::Value>,
}

/// Create share request body.
///
/// `note_id` is optional at the serde level for the same reason as
/// note content above: a missing field gets a 400 with a clear message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShareRequest {
    /// The note to share (required).
    pub note_id: Option<i64>,
    /// Optional share password.
    pub password: Option<String>,
    /// Optional lifetime in hours, fractional allowed.
    pub expires_in_hours: Option<f64>,
}

/// Unlock share request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockShareRequest {
    /// Submitted plaintext password.
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password. Minimum length is enforced by the user service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body. `username` accepts a username or an email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
