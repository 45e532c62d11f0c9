//! Error handling utilities for repositories

use club_core::DomainError;
use sqlx::Error as SqlxError;

/// SQLSTATE for exclusion constraint violations (the calendar overlap rule)
const EXCLUSION_VIOLATION: &str = "23P01";

/// SQLSTATE for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Convert a SQLx error to a DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for a unique violation and return the given error, or fall back
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for a unique or exclusion violation (overlapping ranges raise
/// 23P01, not 23505) and return the given error, or fall back
pub fn map_overlap_violation<F>(e: SqlxError, on_overlap: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() || db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) {
            return on_overlap();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation (the referenced row is gone) and
/// return the given error, or fall back
pub fn map_fk_violation<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return on_missing(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Parse a stored role name, surfacing corrupt rows as internal errors
pub fn parse_role(name: &str) -> Result<club_core::Role, DomainError> {
    name.parse()
        .map_err(|_| DomainError::InternalError(format!("unknown role in storage: {name}")))
}
