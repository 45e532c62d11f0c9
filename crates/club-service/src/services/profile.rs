//! Profile service - the authenticated user's own account
//!
//! Everything here is scoped to the caller; the user id always comes from
//! the resolved identity, never from the request body.

use club_common::auth::hash_password;
use club_core::{DomainError, ProfilePatch, StatusPatch};
use tracing::{info, instrument};

use crate::dto::{
    AvatarResponse, ProfileResponse, StatusBody, StatusResponse, UpdateProfileRequest,
    UpdateStatusRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::policy::Actor;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Full profile for GET /me: account, role, status, achievements
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn me(&self, actor: &Actor) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(actor.id)
            .await?
            .ok_or(DomainError::UserNotFound(actor.id))?;

        let status = self
            .ctx
            .status_repo()
            .find(actor.id)
            .await?
            .unwrap_or_default();

        let achievements = self.ctx.achievement_repo().for_user(actor.id).await?;

        Ok(ProfileResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            dni: user.dni,
            avatar_url: user.avatar_url,
            score: user.score,
            role: actor.role,
            attendance: status.attendance,
            payment: status.payment,
            transport: status.transport,
            food: status.food,
            achievements: achievements.into_iter().map(Into::into).collect(),
        })
    }

    /// Partial profile update; the password is rehashed when provided
    #[instrument(skip(self, actor, request), fields(user_id = actor.id))]
    pub async fn update(
        &self,
        actor: &Actor,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let password_hash = match request.password.as_deref() {
            Some(password) if !password.trim().is_empty() => {
                Some(hash_password(password).map_err(|e| ServiceError::internal(e.to_string()))?)
            }
            _ => None,
        };

        let patch = ProfilePatch {
            name: request.name,
            email: request.email,
            phone: request.phone,
            dni: request.dni,
            password_hash,
        };

        if patch.is_empty() {
            return Err(ServiceError::validation("No fields to update"));
        }

        let user = self.ctx.user_repo().update_profile(actor.id, &patch).await?;

        info!(user_id = user.id, "Profile updated");

        Ok(UserResponse::from(&user))
    }

    /// Partial participation status update
    #[instrument(skip(self, actor, request), fields(user_id = actor.id))]
    pub async fn update_status(
        &self,
        actor: &Actor,
        request: UpdateStatusRequest,
    ) -> ServiceResult<StatusResponse> {
        let patch = StatusPatch {
            attendance: request.attendance,
            payment: request.payment,
            transport: request.transport,
            food: request.food,
        };
        patch.validate()?;

        let status = self.ctx.status_repo().update(actor.id, &patch).await?;

        Ok(StatusResponse {
            status: StatusBody::from(status),
        })
    }

    /// Store an uploaded avatar and record its path
    #[instrument(skip(self, actor, bytes), fields(user_id = actor.id))]
    pub async fn set_avatar(
        &self,
        actor: &Actor,
        filename: Option<&str>,
        bytes: &[u8],
    ) -> ServiceResult<AvatarResponse> {
        let avatar_url = self
            .ctx
            .media_store()
            .store("avatars", &format!("avatar_{}", actor.id), filename, bytes)
            .await?;

        self.ctx.user_repo().set_avatar(actor.id, &avatar_url).await?;

        Ok(AvatarResponse { avatar_url })
    }
}
