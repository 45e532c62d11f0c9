//! Calendar slot allocation service
//!
//! Validates the requested slot against the hour cycle, then lets the
//! storage constraint arbitrate overlaps. A rejected insert surfaces as a
//! conflict; no retry, no alternative suggestions.

use club_core::{DomainError, Role, SlotRange};
use tracing::{info, instrument};

use crate::dto::{CalendarEventResponse, CreateCalendarEventRequest, ScheduledEventResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::policy::Actor;

/// Calendar slot allocation service
pub struct CalendarService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CalendarService<'a> {
    /// Create a new CalendarService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All events with their activity summary, ordered by (day, zone, start)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ScheduledEventResponse>> {
        let events = self.ctx.calendar_repo().list().await?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    /// Book a slot (ADMIN or ORGANIZER)
    #[instrument(skip(self, actor, request), fields(actor_id = actor.id))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateCalendarEventRequest,
    ) -> ServiceResult<CalendarEventResponse> {
        actor.require_at_least(Role::Organizer)?;

        if !(0..=6).contains(&request.day) {
            return Err(DomainError::ValidationError(format!(
                "day {} is outside 0-6",
                request.day
            ))
            .into());
        }
        if !(1..=2).contains(&request.zone) {
            return Err(DomainError::ValidationError(format!(
                "zone {} must be 1 or 2",
                request.zone
            ))
            .into());
        }
        let range = SlotRange::new(request.start_hour, request.end_hour)?;

        let event = self
            .ctx
            .calendar_repo()
            .create(request.activity_id, request.day, request.zone, &range, actor.id)
            .await?;

        info!(
            event_id = event.id,
            day = event.day,
            zone = event.zone,
            "Calendar slot booked"
        );

        Ok(CalendarEventResponse {
            id: event.id,
            day: event.day,
            zone: event.zone,
            start_hour: event.start_hour,
            end_hour: event.end_hour,
            activity_id: event.activity_id,
            created_by: event.created_by,
        })
    }

    /// Delete a booking (ADMIN or ORGANIZER)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        actor.require_at_least(Role::Organizer)?;

        self.ctx.calendar_repo().delete(id).await?;

        info!(event_id = id, "Calendar event deleted");

        Ok(())
    }
}
