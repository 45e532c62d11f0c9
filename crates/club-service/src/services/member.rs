//! Member administration service
//!
//! Listing is open to any authenticated member; everything that mutates
//! another account is role-gated.

use club_core::{DomainError, Role};
use tracing::{info, instrument};

use crate::dto::MemberResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::policy::Actor;

/// Member administration service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All members with their derived role and achievements
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.user_repo().list_members().await?;
        Ok(members.into_iter().map(Into::into).collect())
    }

    /// Replace a member's role assignments with a single role (ADMIN only)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn set_role(&self, actor: &Actor, user_id: i64, role: Role) -> ServiceResult<()> {
        actor.require_admin()?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        self.ctx.role_repo().replace(user_id, role).await?;

        info!(user_id, role = %role, "Role reassigned");

        Ok(())
    }

    /// Delete a member and every join row referencing it (ADMIN only)
    ///
    /// Self-deletion is rejected so an admin cannot lock the club out by
    /// accident.
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn delete(&self, actor: &Actor, user_id: i64) -> ServiceResult<()> {
        actor.require_admin()?;

        if actor.id == user_id {
            return Err(DomainError::CannotDeleteSelf.into());
        }

        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id, "Member deleted");

        Ok(())
    }

    /// Award an achievement to a member (ADMIN or ORGANIZER)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn grant_achievement(
        &self,
        actor: &Actor,
        user_id: i64,
        achievement_id: i64,
    ) -> ServiceResult<()> {
        actor.require_at_least(Role::Organizer)?;

        self.ctx
            .achievement_repo()
            .grant(user_id, achievement_id)
            .await?;

        Ok(())
    }

    /// Remove an awarded achievement from a member (ADMIN only)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn revoke_achievement(
        &self,
        actor: &Actor,
        user_id: i64,
        achievement_id: i64,
    ) -> ServiceResult<()> {
        actor.require_admin()?;

        self.ctx
            .achievement_repo()
            .revoke(user_id, achievement_id)
            .await?;

        Ok(())
    }
}
