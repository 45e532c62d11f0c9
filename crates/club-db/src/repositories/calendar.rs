//! PostgreSQL implementation of CalendarRepository
//!
//! Overlap protection lives in the `calendar_events_no_overlap` exclusion
//! constraint; this repository only translates its violation into the
//! domain conflict.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{CalendarEvent, ScheduledEvent};
use club_core::error::DomainError;
use club_core::traits::{CalendarRepository, RepoResult};
use club_core::value_objects::SlotRange;

use crate::models::ScheduledEventRow;

use super::error::{map_db_error, map_overlap_violation};

/// PostgreSQL implementation of CalendarRepository
#[derive(Clone)]
pub struct PgCalendarRepository {
    pool: PgPool,
}

impl PgCalendarRepository {
    /// Create a new PgCalendarRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarRepository for PgCalendarRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ScheduledEvent>> {
        let rows = sqlx::query_as::<_, ScheduledEventRow>(
            r"
            SELECT ce.id, ce.day, ce.zone, ce.start_hour, ce.end_hour,
                   ce.activity_id, ce.created_by, ce.created_at,
                   a.title AS activity_title,
                   a.kind AS activity_kind,
                   a.description AS activity_description,
                   a.participants AS activity_participants,
                   a.duration AS activity_duration,
                   a.image_url AS activity_image_url
            FROM calendar_events ce
            JOIN activities a ON a.id = ce.activity_id
            ORDER BY ce.day, ce.zone, ce.start_slot
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ScheduledEvent::from).collect())
    }

    #[instrument(skip(self, range))]
    async fn create(
        &self,
        activity_id: i64,
        day: i32,
        zone: i32,
        range: &SlotRange,
        created_by: i64,
    ) -> RepoResult<CalendarEvent> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r"
            INSERT INTO calendar_events (activity_id, day, zone, start_hour, end_hour, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at
            ",
        )
        .bind(activity_id)
        .bind(day)
        .bind(zone)
        .bind(range.start_hour())
        .bind(range.end_hour())
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return DomainError::ActivityNotFound(activity_id);
                }
            }
            map_overlap_violation(e, || DomainError::SlotOccupied)
        })?;

        Ok(CalendarEvent {
            id,
            day,
            zone,
            start_hour: range.start_hour(),
            end_hour: range.end_hour(),
            activity_id,
            created_by: Some(created_by),
            created_at,
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM calendar_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CalendarEventNotFound(id));
        }

        Ok(())
    }
}
