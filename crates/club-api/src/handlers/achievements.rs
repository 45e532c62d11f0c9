//! Achievement handlers

use axum::{
    extract::{Path, State},
    Json,
};
use club_service::{
    AchievementResponse, AchievementService, CreateAchievementRequest, SuccessResponse,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List achievement definitions
///
/// GET /achievements
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<AchievementResponse>>> {
    let service = AchievementService::new(state.service_context());
    let achievements = service.list().await?;
    Ok(Json(achievements))
}

/// Create an achievement definition
///
/// POST /achievements
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateAchievementRequest>,
) -> ApiResult<Created<Json<AchievementResponse>>> {
    let service = AchievementService::new(state.service_context());
    let achievement = service.create(&user.actor(), request).await?;
    Ok(Created(Json(achievement)))
}

/// Delete an achievement definition
///
/// DELETE /achievements/:id
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = AchievementService::new(state.service_context());
    service.delete(&user.actor(), id).await?;
    Ok(Json(SuccessResponse::ok()))
}
