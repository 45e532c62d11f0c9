//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Names and emails get
//! a process-unique suffix so repeated runs against the same database never
//! trip the uniqueness constraints.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64)
        .unwrap_or(0);
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    nanos * 10_000 + count
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("member{suffix}"),
            email: format!("member{suffix}@example.com"),
            password: "secret123".to_string(),
            dni: None,
            phone: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            name: reg.name.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Account fields returned by register/login and PUT /me
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dni: Option<String>,
    pub avatar_url: Option<String>,
    pub score: i32,
}

/// `{ "user": ... }` envelope around profile payloads
#[derive(Debug, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

/// Full profile from GET /me
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub score: i32,
    pub attendance: i16,
    pub payment: i16,
    pub transport: i16,
    pub food: i16,
    pub achievements: Vec<AchievementResponse>,
}

/// Partial profile update
#[derive(Debug, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Partial status update
#[derive(Debug, Default, Serialize)]
pub struct UpdateStatusRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<i16>,
}

/// `{ "status": ... }` envelope from PUT /me/status
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope {
    pub status: StatusResponse,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub attendance: i16,
    pub payment: i16,
    pub transport: i16,
    pub food: i16,
}

/// Create an activity or ludoteca entry
#[derive(Debug, Clone, Serialize)]
pub struct CreateBoardItemRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
}

impl CreateBoardItemRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Torneo {suffix}"),
            kind: "Juego de mesa".to_string(),
            description: "Partida clasificatoria".to_string(),
            participants: Some(4),
            duration: Some(90),
        }
    }
}

/// An activity or ludoteca entry with its listing aggregates
#[derive(Debug, Deserialize)]
pub struct BoardItemResponse {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub created_by: Option<i64>,
    pub creator_name: Option<String>,
    pub participants_list: Vec<ParticipantResponse>,
    pub is_joined: bool,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantResponse {
    pub id: i64,
    pub name: String,
}

/// Book a slot on the weekly grid
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CreateCalendarEventRequest {
    pub activity_id: i64,
    pub day: i32,
    pub zone: i32,
    pub start_hour: i32,
    pub end_hour: i32,
}

/// A freshly created booking
#[derive(Debug, Deserialize)]
pub struct CalendarEventResponse {
    pub id: i64,
    pub day: i32,
    pub zone: i32,
    pub start_hour: i32,
    pub end_hour: i32,
    pub activity_id: i64,
}

/// A booked slot joined with its activity summary (GET /calendar)
#[derive(Debug, Deserialize)]
pub struct ScheduledEventResponse {
    pub id: i64,
    pub day: i32,
    pub zone: i32,
    pub start_hour: i32,
    pub end_hour: i32,
    pub activity: ActivitySummaryResponse,
}

#[derive(Debug, Deserialize)]
pub struct ActivitySummaryResponse {
    pub id: i64,
    pub title: String,
}

/// Create an achievement definition
#[derive(Debug, Clone, Serialize)]
pub struct CreateAchievementRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl CreateAchievementRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Explorer {suffix}"),
            description: "Joined 5 activities".to_string(),
            avatar_url: None,
        }
    }
}

/// An achievement definition
#[derive(Debug, Deserialize)]
pub struct AchievementResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub avatar_url: Option<String>,
}

/// Replace a member's role assignments
#[derive(Debug, Serialize)]
pub struct SetRoleRequest {
    pub role: String,
}

/// Award an achievement to a member
#[derive(Debug, Serialize)]
pub struct GrantAchievementRequest {
    pub achievement_id: i64,
}

/// A member row in the administration listing
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub achievements: Vec<AchievementResponse>,
}

/// Body for delete-style operations
#[derive(Debug, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
