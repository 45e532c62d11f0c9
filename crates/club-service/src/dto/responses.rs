//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use club_core::Role;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Body for delete-style operations
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "user": ... }` envelope used by the profile endpoints
#[derive(Debug, Serialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Account fields returned by register/login and profile updates
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub score: i32,
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Full profile for GET /me: account, derived role, participation status,
/// and awarded achievements
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub score: i32,
    pub role: Role,
    pub attendance: i16,
    pub payment: i16,
    pub transport: i16,
    pub food: i16,
    pub achievements: Vec<AchievementResponse>,
}

/// `{ "status": ... }` envelope for PUT /me/status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: StatusBody,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusBody {
    pub attendance: i16,
    pub payment: i16,
    pub transport: i16,
    pub food: i16,
}

/// Body for POST /me/avatar
#[derive(Debug, Serialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

// ============================================================================
// Board Responses (activities and ludoteca)
// ============================================================================

/// An activity or ludoteca entry with its listing aggregates
#[derive(Debug, Serialize)]
pub struct BoardItemResponse {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub creator_name: Option<String>,
    pub participants_list: Vec<ParticipantResponse>,
    pub is_joined: bool,
}

/// One member in a participant list
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// Calendar Responses
// ============================================================================

/// A booked slot joined with its activity summary (GET /calendar)
#[derive(Debug, Serialize)]
pub struct ScheduledEventResponse {
    pub id: i64,
    pub day: i32,
    pub zone: i32,
    pub start_hour: i32,
    pub end_hour: i32,
    pub activity: ActivitySummaryResponse,
}

#[derive(Debug, Serialize)]
pub struct ActivitySummaryResponse {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A freshly created booking (POST /calendar)
#[derive(Debug, Serialize)]
pub struct CalendarEventResponse {
    pub id: i64,
    pub day: i32,
    pub zone: i32,
    pub start_hour: i32,
    pub end_hour: i32,
    pub activity_id: i64,
    pub created_by: Option<i64>,
}

// ============================================================================
// Achievement Responses
// ============================================================================

/// An achievement definition
#[derive(Debug, Clone, Serialize)]
pub struct AchievementResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// ============================================================================
// Member Responses
// ============================================================================

/// A member row in the administration listing
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub score: i32,
    pub role: Role,
    pub achievements: Vec<AchievementResponse>,
}
