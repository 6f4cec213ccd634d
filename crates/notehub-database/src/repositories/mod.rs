//! Concrete repository implementations, one per entity.

pub mod note;
pub mod share;
pub mod user;

/// Returns true when a sqlx error is a unique constraint violation.
///
/// Used by callers that treat duplicates as an expected condition:
/// share-code collisions trigger a bounded regenerate-and-retry, and
/// duplicate usernames surface as a conflict rather than a server error.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
