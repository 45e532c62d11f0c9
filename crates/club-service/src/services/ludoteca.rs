//! Ludoteca board service
//!
//! Mirrors the activity board, with a stricter delete/image policy: only
//! the creator or an ADMIN may touch a specific entry.

use club_core::{DomainError, NewBoardItem, Role};
use tracing::{info, instrument};

use crate::dto::{BoardItemResponse, CreateBoardItemRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::policy::Actor;

/// Ludoteca board service
pub struct LudotecaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LudotecaService<'a> {
    /// Create a new LudotecaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All entries, newest first, with aggregates scoped to the viewer
    #[instrument(skip(self, actor), fields(viewer_id = actor.id))]
    pub async fn list(&self, actor: &Actor) -> ServiceResult<Vec<BoardItemResponse>> {
        let items = self.ctx.ludoteca_repo().list(actor.id).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    /// One entry with aggregates
    #[instrument(skip(self, actor), fields(viewer_id = actor.id))]
    pub async fn get(&self, actor: &Actor, id: i64) -> ServiceResult<BoardItemResponse> {
        self.detail(id, actor.id).await
    }

    /// Create an entry (ADMIN or ORGANIZER)
    #[instrument(skip(self, actor, request), fields(actor_id = actor.id, title = %request.title))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateBoardItemRequest,
    ) -> ServiceResult<BoardItemResponse> {
        actor.require_at_least(Role::Organizer)?;

        let entry = self
            .ctx
            .ludoteca_repo()
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

        info!(entry_id = entry.id, "Ludoteca entry created");

        Ok(BoardItemResponse::created_entry(entry, actor.name.clone()))
    }

    /// Mark interest; marking twice is a no-op
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn join(&self, actor: &Actor, id: i64) -> ServiceResult<BoardItemResponse> {
        self.ctx.ludoteca_repo().join(id, actor.id).await?;
        self.detail(id, actor.id).await
    }

    /// Withdraw interest
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn leave(&self, actor: &Actor, id: i64) -> ServiceResult<BoardItemResponse> {
        self.ctx.ludoteca_repo().leave(id, actor.id).await?;
        self.detail(id, actor.id).await
    }

    /// Remove another member's interest mark (ADMIN or ORGANIZER)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn remove_participant(
        &self,
        actor: &Actor,
        id: i64,
        user_id: i64,
    ) -> ServiceResult<BoardItemResponse> {
        actor.require_at_least(Role::Organizer)?;

        self.ctx.ludoteca_repo().leave(id, user_id).await?;
        self.detail(id, actor.id).await
    }

    /// Replace the entry image (creator or ADMIN)
    #[instrument(skip(self, actor, bytes), fields(actor_id = actor.id))]
    pub async fn replace_image(
        &self,
        actor: &Actor,
        id: i64,
        filename: Option<&str>,
        bytes: &[u8],
    ) -> ServiceResult<BoardItemResponse> {
        let created_by = self.ctx.ludoteca_repo().creator(id).await?;
        actor.require_owner_or(created_by, Role::Admin)?;

        let image_url = self
            .ctx
            .media_store()
            .store("ludoteca", &format!("ludoteca_{id}"), filename, bytes)
            .await?;

        self.ctx.ludoteca_repo().set_image(id, &image_url).await?;

        self.detail(id, actor.id).await
    }

    /// Delete an entry (creator or ADMIN)
    #[instrument(skip(self, actor), fields(actor_id = actor.id))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        let created_by = self.ctx.ludoteca_repo().creator(id).await?;
        actor.require_owner_or(created_by, Role::Admin)?;

        self.ctx.ludoteca_repo().delete(id).await?;

        info!(entry_id = id, "Ludoteca entry deleted");

        Ok(())
    }

    async fn detail(&self, id: i64, viewer_id: i64) -> ServiceResult<BoardItemResponse> {
        self.ctx
            .ludoteca_repo()
            .find_detail(id, viewer_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| DomainError::LudotecaEntryNotFound(id).into())
    }
}
