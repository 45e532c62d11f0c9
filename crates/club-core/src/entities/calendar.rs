//! Calendar event entity - a booked slot on the weekly grid

use chrono::{DateTime, Utc};

/// A booked slot: one activity occupying an hour range in a (day, zone)
/// column of the weekly grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: i64,
    /// Day of week, 0 = Monday .. 6 = Sunday
    pub day: i32,
    /// Parallel track within the day, 1 or 2
    pub zone: i32,
    pub start_hour: i32,
    pub end_hour: i32,
    pub activity_id: i64,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Condensed activity fields attached to calendar listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySummary {
    pub id: i64,
    pub title: String,
    pub kind: String,
    pub description: String,
    pub participants: Option<i32>,
    pub duration: Option<i32>,
    pub image_url: Option<String>,
}

/// A calendar event joined with its activity summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub event: CalendarEvent,
    pub activity: ActivitySummary,
}
