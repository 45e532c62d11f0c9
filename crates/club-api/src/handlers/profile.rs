//! Profile handlers
//!
//! Endpoints for the authenticated user's own account.

use axum::{
    extract::{Multipart, State},
    Json,
};
use club_service::{
    AvatarResponse, ProfileResponse, ProfileService, StatusResponse, UpdateProfileRequest,
    UpdateStatusRequest, UserEnvelope, UserResponse,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

use super::read_image_field;

/// Get the authenticated user's profile
///
/// GET /me
pub async fn get_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<UserEnvelope<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.me(&user.actor()).await?;
    Ok(Json(UserEnvelope { user: profile }))
}

/// Update the authenticated user's profile
///
/// PUT /me
pub async fn update_me(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserEnvelope<UserResponse>>> {
    let service = ProfileService::new(state.service_context());
    let updated = service.update(&user.actor(), request).await?;
    Ok(Json(UserEnvelope { user: updated }))
}

/// Update the authenticated user's participation status
///
/// PUT /me/status
pub async fn update_status(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = ProfileService::new(state.service_context());
    let status = service.update_status(&user.actor(), request).await?;
    Ok(Json(status))
}

/// Upload or replace the authenticated user's avatar
///
/// POST /me/avatar (multipart field `avatar`)
pub async fn upload_avatar(
    State(state): State<AppState>,
    user: CurrentUser,
    multipart: Multipart,
) -> ApiResult<Json<AvatarResponse>> {
    let (filename, bytes) = read_image_field(multipart, "avatar").await?;

    let service = ProfileService::new(state.service_context());
    let response = service
        .set_avatar(&user.actor(), filename.as_deref(), &bytes)
        .await?;
    Ok(Json(response))
}
