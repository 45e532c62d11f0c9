//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Role;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Activity not found: {0}")]
    ActivityNotFound(i64),

    #[error("Ludoteca entry not found: {0}")]
    LudotecaEntryNotFound(i64),

    #[error("Calendar event not found: {0}")]
    CalendarEventNotFound(i64),

    #[error("Achievement not found: {0}")]
    AchievementNotFound(i64),

    #[error("Participation status not found for user {0}")]
    StatusNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("You cannot delete your own account")]
    CannotDeleteSelf,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Requires at least the {0} role")]
    RoleRequired(Role),

    #[error("Only the creator or a privileged member may do this")]
    NotOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A user with that name, email or DNI already exists")]
    UserAlreadyExists,

    #[error("An achievement with that name already exists")]
    AchievementAlreadyExists,

    #[error("That slot is already occupied")]
    SlotOccupied,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ActivityNotFound(_)
                | Self::LudotecaEntryNotFound(_)
                | Self::CalendarEventNotFound(_)
                | Self::AchievementNotFound(_)
                | Self::StatusNotFound(_)
        )
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::CannotDeleteSelf)
    }

    /// Check if this is an authorization error
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::RoleRequired(_) | Self::NotOwner)
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyExists | Self::AchievementAlreadyExists | Self::SlotOccupied
        )
    }
}
