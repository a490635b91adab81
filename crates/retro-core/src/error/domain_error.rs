//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::IdParseError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Meeting not found: {0}")]
    MeetingNotFound(String),

    #[error("Phase not found: {0}")]
    PhaseNotFound(String),

    #[error("Stage not found: {0}")]
    StageNotFound(String),

    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidId(#[from] IdParseError),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not a member of the meeting")]
    NotMeetingMember,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MeetingNotFound(_) => "UNKNOWN_MEETING",
            Self::PhaseNotFound(_) => "UNKNOWN_PHASE",
            Self::StageNotFound(_) => "UNKNOWN_STAGE",
            Self::PromptNotFound(_) => "UNKNOWN_PROMPT",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidId(_) => "INVALID_ID",

            // Authorization
            Self::NotMeetingMember => "NOT_MEETING_MEMBER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MeetingNotFound(_)
                | Self::PhaseNotFound(_)
                | Self::StageNotFound(_)
                | Self::PromptNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidId(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotMeetingMember)
    }
}
