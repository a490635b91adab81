//! Error handling utilities for repositories

use retro_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "meeting not found" error
pub fn meeting_not_found(id: &str) -> DomainError {
    DomainError::MeetingNotFound(id.to_string())
}
