//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation at the boundary, before any business logic runs.

use club_core::Role;
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Name must be 2-32 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    #[validate(custom(function = "validate_dni"))]
    pub dni: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Partial profile update; omitted fields keep their stored value
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 32, message = "Name must be 2-32 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(custom(function = "validate_dni"))]
    pub dni: Option<String>,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: Option<String>,
}

/// Partial participation status update
#[derive(Debug, Clone, Copy, Deserialize, Validate, Default)]
pub struct UpdateStatusRequest {
    #[validate(range(min = 0, max = 1, message = "attendance must be 0 or 1"))]
    pub attendance: Option<i16>,

    #[validate(range(min = 0, max = 1, message = "payment must be 0 or 1"))]
    pub payment: Option<i16>,

    #[validate(range(min = 0, max = 2, message = "transport must be 0, 1 or 2"))]
    pub transport: Option<i16>,

    #[validate(range(min = 0, max = 2, message = "food must be 0, 1 or 2"))]
    pub food: Option<i16>,
}

// ============================================================================
// Board Requests (activities and ludoteca)
// ============================================================================

/// Create an activity or ludoteca entry
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBoardItemRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    /// Free-text category
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "Type must be 1-50 characters"))]
    pub kind: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,

    /// Suggested participant count
    #[validate(range(min = 1, message = "Participants must be positive"))]
    pub participants: Option<i32>,

    /// Expected duration in minutes
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: Option<i32>,

    pub image_url: Option<String>,
}

// ============================================================================
// Calendar Requests
// ============================================================================

/// Book a slot on the weekly grid; every field is required
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CreateCalendarEventRequest {
    pub activity_id: i64,
    pub day: i32,
    pub zone: i32,
    pub start_hour: i32,
    pub end_hour: i32,
}

// ============================================================================
// Achievement Requests
// ============================================================================

/// Create an achievement definition
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAchievementRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "Description must be 1-500 characters"))]
    pub description: String,

    /// Explicit stored avatar path; nothing is derived from the name
    pub avatar_url: Option<String>,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Replace a member's role assignments with a single role
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct SetRoleRequest {
    pub role: Role,
}

/// Award an achievement to a member
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct GrantAchievementRequest {
    pub achievement_id: i64,
}

// ============================================================================
// Custom validators
// ============================================================================

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.len() == 9 && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Phone must be 9 digits".into()))
    }
}

fn validate_dni(dni: &str) -> Result<(), ValidationError> {
    if !dni.is_empty() && dni.len() <= 32 && dni.chars().any(char::is_alphabetic) {
        Ok(())
    } else {
        Err(ValidationError::new("dni").with_message("DNI must contain at least one letter".into()))
    }
}
