//! Activity entity - a club activity members can join

use chrono::{DateTime, Utc};

/// An activity published on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    /// Free-text category ("Rol de mesa", "Torneo", ...)
    pub kind: String,
    pub description: String,
    /// Suggested participant count, when the organizer set one
    pub participants: Option<i32>,
    /// Expected duration in minutes
    pub duration: Option<i32>,
    pub image_url: Option<String>,
    /// Creator reference; cleared when the creator account is removed
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}
