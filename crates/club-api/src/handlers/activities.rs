//! Activity handlers

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use club_service::{
    ActivityService, BoardItemResponse, CreateBoardItemRequest, SuccessResponse,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

use super::read_image_field;

/// List activities
///
/// GET /activities
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<BoardItemResponse>>> {
    let service = ActivityService::new(state.service_context());
    let items = service.list(&user.actor()).await?;
    Ok(Json(items))
}

/// Get one activity
///
/// GET /activities/:id
pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<BoardItemResponse>> {
    let service = ActivityService::new(state.service_context());
    let item = service.get(&user.actor(), id).await?;
    Ok(Json(item))
}

/// Create an activity
///
/// POST /activities
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateBoardItemRequest>,
) -> ApiResult<Created<Json<BoardItemResponse>>> {
    let service = ActivityService::new(state.service_context());
    let item = service.create(&user.actor(), request).await?;
    Ok(Created(Json(item)))
}

/// Join an activity
///
/// POST /activities/:id/join
pub async fn join(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<BoardItemResponse>> {
    let service = ActivityService::new(state.service_context());
    let item = service.join(&user.actor(), id).await?;
    Ok(Json(item))
}

/// Leave an activity
///
/// DELETE /activities/:id/join
pub async fn leave(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<BoardItemResponse>> {
    let service = ActivityService::new(state.service_context());
    let item = service.leave(&user.actor(), id).await?;
    Ok(Json(item))
}

/// Remove a participant from an activity
///
/// DELETE /activities/:id/participants/:user_id
pub async fn remove_participant(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((id, user_id)): Path<(i64, i64)>,
) -> ApiResult<Json<BoardItemResponse>> {
    let service = ActivityService::new(state.service_context());
    let item = service.remove_participant(&user.actor(), id, user_id).await?;
    Ok(Json(item))
}

/// Replace the activity image
///
/// PATCH /activities/:id/image (multipart field `image`)
pub async fn replace_image(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<Json<BoardItemResponse>> {
    let (filename, bytes) = read_image_field(multipart, "image").await?;

    let service = ActivityService::new(state.service_context());
    let item = service
        .replace_image(&user.actor(), id, filename.as_deref(), &bytes)
        .await?;
    Ok(Json(item))
}

/// Delete an activity
///
/// DELETE /activities/:id
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = ActivityService::new(state.service_context());
    service.delete(&user.actor(), id).await?;
    Ok(Json(SuccessResponse::ok()))
}
