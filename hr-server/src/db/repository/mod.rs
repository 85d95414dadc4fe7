//! Repository Module
//!
//! Parameterized CRUD queries per entity — the only place that knows table
//! and column names. Store-level constraint failures are classified by the
//! driver's structured error kind plus the violated-constraint identity,
//! never by sniffing free-text messages alone.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod employee_training;
pub mod evaluation;
pub mod job_position;
pub mod leave_request;
pub mod payroll;
pub mod training;

use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Referential block: {0}")]
    ReferentialBlock(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::ReferentialBlock(msg) => AppError::ReferentialBlock(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// The `table.column` list SQLite reports after the constraint kind,
/// e.g. `UNIQUE constraint failed: employee.cnic`.
fn constraint_columns(message: &str) -> &str {
    message
        .rsplit_once(": ")
        .map(|(_, columns)| columns)
        .unwrap_or(message)
}

/// Classify an insert/update failure. Unique violations are mapped to an
/// entity-aware message through `unique_messages` (`table.column` →
/// message); a foreign-key violation means the submitted reference does
/// not resolve to a row.
pub(crate) fn classify_write(
    err: sqlx::Error,
    unique_messages: &[(&str, &str)],
    missing_reference: &str,
) -> RepoError {
    match &err {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation => {
                let columns = constraint_columns(db.message());
                let message = unique_messages
                    .iter()
                    .find(|(column, _)| columns.split(", ").any(|c| c == *column))
                    .map(|(_, message)| (*message).to_string())
                    .unwrap_or_else(|| format!("Duplicate value for {columns}"));
                RepoError::Duplicate(message)
            }
            ErrorKind::ForeignKeyViolation => RepoError::Validation(missing_reference.to_string()),
            _ => RepoError::Database(err.to_string()),
        },
        _ => RepoError::Database(err.to_string()),
    }
}

/// Classify a delete failure: a foreign-key violation here means dependent
/// rows still reference the target, which must be surfaced as a
/// referential block rather than a generic failure.
pub(crate) fn classify_delete(err: sqlx::Error, blocked_message: &str) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::ForeignKeyViolation) => {
            RepoError::ReferentialBlock(blocked_message.to_string())
        }
        _ => RepoError::Database(err.to_string()),
    }
}
