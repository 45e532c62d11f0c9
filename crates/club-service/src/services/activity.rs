//! Activity board service
//!
//! Listing, joining and leaving are open to any authenticated member.
//! Creation needs ADMIN or ORGANIZER; deleting or replacing the image of a
//! specific activity needs ownership or one of those roles.

use club_core::{DomainError, NewBoardItem, Role};
use tracing::{info, instrument};

use crate::dto::{BoardItemResponse, CreateBoardItemRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::policy::Actor;

/// Activity board service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All activities, newest first, with aggregates scoped to the viewer
    #[instrument(skip(self, actor), fields(viewer_id = actor.id))]
    pub async fn list(&self, actor: &Actor) -> ServiceResult<Vec<BoardItemResponse>> {
        let items = self.ctx.activity_repo().list(actor.id).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    /// One activity with aggregates
    #[instrument(skip(self, actor), fields(viewer_id = actor.id))]
    pub async fn get(&self, actor: &Actor, id: i64) -> ServiceResult<BoardItemResponse> {
        self.detail(id, actor.id).await
    }

    /// Create an activity (ADMIN or ORGANIZER)
    #[instrument(skip(self, actor, request), fields(actor_id = actor.id, title = %request.title))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateBoardItemRequest,
    ) -> ServiceResult<BoardItemResponse> {
        actor.require_at_least(Role::Organizer)?;

        let activity = self
            .ctx
            .activity_repo()
            .create(&NewBoardItem {
                title: request.title,
                kind: request.kind,
                description: request.description,
                participants: request.participants,
                duration: request.duration,
                image_url: request.image_url,
                created_by: actor.id,
            })
            .await?;

        info!(activity_id = activity.id, "Activity created");

        Ok(BoardItemResponse::created(activity, actor.name.clone()))
    }

    /// Join an activity; joining twice is a no-op
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn join(&self, actor: &Actor, id: i64) -> ServiceResult<BoardItemResponse> {
        self.ctx.activity_repo().join(id, actor.id).await?;
        self.detail(id, actor.id).await
    }

    /// Leave an activity
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn leave(&self, actor: &Actor, id: i64) -> ServiceResult<BoardItemResponse> {
        self.ctx.activity_repo().leave(id, actor.id).await?;
        self.detail(id, actor.id).await
    }

    /// Remove another member from an activity (ADMIN or ORGANIZER)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn remove_participant(
        &self,
        actor: &Actor,
        id: i64,
        user_id: i64,
    ) -> ServiceResult<BoardItemResponse> {
        actor.require_at_least(Role::Organizer)?;

        self.ctx.activity_repo().leave(id, user_id).await?;
        self.detail(id, actor.id).await
    }

    /// Replace the activity image (owner, ADMIN or ORGANIZER)
    #[instrument(skip(self, actor, bytes), fields(actor_id = actor.id))]
    pub async fn replace_image(
        &self,
        actor: &Actor,
        id: i64,
        filename: Option<&str>,
        bytes: &[u8],
    ) -> ServiceResult<BoardItemResponse> {
        let created_by = self.ctx.activity_repo().creator(id).await?;
        actor.require_owner_or(created_by, Role::Organizer)?;

        let image_url = self
            .ctx
            .media_store()
            .store("activities", &format!("activity_{id}"), filename, bytes)
            .await?;

        self.ctx.activity_repo().set_image(id, &image_url).await?;

        self.detail(id, actor.id).await
    }

    /// Delete an activity (owner, ADMIN or ORGANIZER)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        let created_by = self.ctx.activity_repo().creator(id).await?;
        actor.require_owner_or(created_by, Role::Organizer)?;

        self.ctx.activity_repo().delete(id).await?;

        info!(activity_id = id, "Activity deleted");

        Ok(())
    }

    async fn detail(&self, id: i64, viewer_id: i64) -> ServiceResult<BoardItemResponse> {
        self.ctx
            .activity_repo()
            .find_detail(id, viewer_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| DomainError::ActivityNotFound(id).into())
    }
}
