//! Member administration handlers

use axum::{
    extract::{Path, State},
    Json,
};
use club_service::{
    GrantAchievementRequest, MemberResponse, MemberService, SetRoleRequest, SuccessResponse,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all members
///
/// GET /members
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let members = service.list().await?;
    Ok(Json(members))
}

/// Reassign a member's role
///
/// PATCH /members/:id/role
pub async fn set_role(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<SetRoleRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = MemberService::new(state.service_context());
    service.set_role(&user.actor(), id, request.role).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Delete a member
///
/// DELETE /members/:id
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = MemberService::new(state.service_context());
    service.delete(&user.actor(), id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Award an achievement to a member
///
/// POST /members/:id/achievements
pub async fn grant_achievement(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<GrantAchievementRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = MemberService::new(state.service_context());
    service
        .grant_achievement(&user.actor(), id, request.achievement_id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Remove an awarded achievement from a member
///
/// DELETE /members/:id/achievements/:achievement_id
pub async fn revoke_achievement(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((id, achievement_id)): Path<(i64, i64)>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = MemberService::new(state.service_context());
    service
        .revoke_achievement(&user.actor(), id, achievement_id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
