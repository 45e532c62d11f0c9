//! Calendar handlers

use axum::{
    extract::{Path, State},
    Json,
};
use club_service::{
    CalendarEventResponse, CalendarService, CreateCalendarEventRequest, ScheduledEventResponse,
    SuccessResponse,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the weekly calendar
///
/// GET /calendar
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<ScheduledEventResponse>>> {
    let service = CalendarService::new(state.service_context());
    let events = service.list().await?;
    Ok(Json(events))
}

/// Book a slot
///
/// POST /calendar
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateCalendarEventRequest>,
) -> ApiResult<Created<Json<CalendarEventResponse>>> {
    let service = CalendarService::new(state.service_context());
    let event = service.create(&user.actor(), request).await?;
    Ok(Created(Json(event)))
}

/// Delete a booking
///
/// DELETE /calendar/:id
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = CalendarService::new(state.service_context());
    service.delete(&user.actor(), id).await?;
    Ok(Json(SuccessResponse::ok()))
}
