//! Achievement definition service

use club_core::Role;
use tracing::{info, instrument};

use crate::dto::{AchievementResponse, CreateAchievementRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::policy::Actor;

/// Achievement definition service
pub struct AchievementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AchievementService<'a> {
    /// Create a new AchievementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All achievement definitions
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<AchievementResponse>> {
        let achievements = self.ctx.achievement_repo().list().await?;
        Ok(achievements.into_iter().map(Into::into).collect())
    }

    /// Create a definition (ADMIN or ORGANIZER)
    #[instrument(skip(self, actor, request), fields(actor_id = actor.id, name = %request.name))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateAchievementRequest,
    ) -> ServiceResult<AchievementResponse> {
        actor.require_at_least(Role::Organizer)?;

        let achievement = self
            .ctx
            .achievement_repo()
            .create(
                request.name.trim(),
                request.description.trim(),
                request.avatar_url.as_deref(),
            )
            .await?;

        info!(achievement_id = achievement.id, "Achievement created");

        Ok(achievement.into())
    }

    /// Delete a definition and its assignments (ADMIN only)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        actor.require_admin()?;

        self.ctx.achievement_repo().delete(id).await?;

        info!(achievement_id = id, "Achievement deleted");

        Ok(())
    }
}
