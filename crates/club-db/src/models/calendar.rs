//! Calendar event row model

use chrono::{DateTime, Utc};
use club_core::{ActivitySummary, CalendarEvent, ScheduledEvent};
use sqlx::FromRow;

/// A calendar event joined with its activity summary columns
#[derive(Debug, Clone, FromRow)]
pub struct ScheduledEventRow {
    pub id: i64,
    pub day: i32,
    pub zone: i32,
    pub start_hour: i32,
    pub end_hour: i32,
    pub activity_id: i64,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub activity_title: String,
    pub activity_kind: String,
    pub activity_description: String,
    pub activity_participants: Option<i32>,
    pub activity_duration: Option<i32>,
    pub activity_image_url: Option<String>,
}

impl From<ScheduledEventRow> for ScheduledEvent {
    fn from(r: ScheduledEventRow) -> Self {
        Self {
            event: CalendarEvent {
                id: r.id,
                day: r.day,
                zone: r.zone,
                start_hour: r.start_hour,
                end_hour: r.end_hour,
                activity_id: r.activity_id,
                created_by: r.created_by,
                created_at: r.created_at,
            },
            activity: ActivitySummary {
                id: r.activity_id,
                title: r.activity_title,
                kind: r.activity_kind,
                description: r.activity_description,
                participants: r.activity_participants,
                duration: r.activity_duration,
                image_url: r.activity_image_url,
            },
        }
    }
}
