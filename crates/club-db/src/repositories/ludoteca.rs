//! PostgreSQL implementation of LudotecaRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{LudotecaEntry, Participant};
use club_core::error::DomainError;
use club_core::traits::{LudotecaDetail, LudotecaRepository, NewBoardItem, RepoResult};

use crate::models::{BoardRow, ParticipantRow};

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of LudotecaRepository
#[derive(Clone)]
pub struct PgLudotecaRepository {
    pool: PgPool,
}

impl PgLudotecaRepository {
    /// Create a new PgLudotecaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn participants_for(
        &self,
        ids: &[i64],
    ) -> RepoResult<HashMap<i64, Vec<Participant>>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r"
            SELECT lp.ludoteca_id AS parent_id, u.id AS user_id, u.name, u.avatar_url, lp.joined_at
            FROM ludoteca_participants lp
            JOIN users u ON u.id = lp.user_id
            WHERE lp.ludoteca_id = ANY($1)
            ORDER BY lp.joined_at, u.id
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_parent: HashMap<i64, Vec<Participant>> = HashMap::new();
        for row in rows {
            by_parent.entry(row.parent_id).or_default().push(row.into());
        }

        Ok(by_parent)
    }
}

fn assemble(row: &BoardRow, participants: Vec<Participant>) -> LudotecaDetail {
    LudotecaDetail {
        entry: LudotecaEntry::from(row),
        creator_name: row.creator_name.clone(),
        is_joined: row.is_joined,
        participants,
    }
}

#[async_trait]
impl LudotecaRepository for PgLudotecaRepository {
    #[instrument(skip(self))]
    async fn list(&self, viewer_id: i64) -> RepoResult<Vec<LudotecaDetail>> {
        let rows = sqlx::query_as::<_, BoardRow>(
            r"
            SELECT l.id, l.title, l.kind, l.description, l.participants, l.duration,
                   l.image_url, l.created_by, l.created_at,
                   cu.name AS creator_name,
                   EXISTS(
                       SELECT 1 FROM ludoteca_participants lp
                       WHERE lp.ludoteca_id = l.id AND lp.user_id = $1
                   ) AS is_joined
            FROM ludoteca l
            LEFT JOIN users cu ON cu.id = l.created_by
            ORDER BY l.id DESC
            ",
        )
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut participants = self.participants_for(&ids).await?;

        Ok(rows
            .iter()
            .map(|row| assemble(row, participants.remove(&row.id).unwrap_or_default()))
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_detail(&self, id: i64, viewer_id: i64) -> RepoResult<Option<LudotecaDetail>> {
        let row = sqlx::query_as::<_, BoardRow>(
            r"
            SELECT l.id, l.title, l.kind, l.description, l.participants, l.duration,
                   l.image_url, l.created_by, l.created_at,
                   cu.name AS creator_name,
                   EXISTS(
                       SELECT 1 FROM ludoteca_participants lp
                       WHERE lp.ludoteca_id = l.id AND lp.user_id = $2
                   ) AS is_joined
            FROM ludoteca l
            LEFT JOIN users cu ON cu.id = l.created_by
            WHERE l.id = $1
            ",
        )
        .bind(id)
        .bind(viewer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut participants = self.participants_for(&[row.id]).await?;
        Ok(Some(assemble(
            &row,
            participants.remove(&row.id).unwrap_or_default(),
        )))
    }

    #[instrument(skip(self, item), fields(title = %item.title))]
    async fn create(&self, item: &NewBoardItem) -> RepoResult<LudotecaEntry> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r"
            INSERT INTO ludoteca (title, kind, description, participants, duration, image_url, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, created_at
            ",
        )
        .bind(&item.title)
        .bind(&item.kind)
        .bind(&item.description)
        .bind(item.participants)
        .bind(item.duration)
        .bind(&item.image_url)
        .bind(item.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, |_| DomainError::UserNotFound(item.created_by)))?;

        Ok(LudotecaEntry {
            id,
            title: item.title.clone(),
            kind: item.kind.clone(),
            description: item.description.clone(),
            participants: item.participants,
            duration: item.duration,
            image_url: item.image_url.clone(),
            created_by: Some(item.created_by),
            created_at,
        })
    }

    #[instrument(skip(self))]
    async fn creator(&self, id: i64) -> RepoResult<Option<i64>> {
        sqlx::query_scalar::<_, Option<i64>>(
            r"
            SELECT created_by FROM ludoteca WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::LudotecaEntryNotFound(id))
    }

    #[instrument(skip(self))]
    async fn join(&self, id: i64, user_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO ludoteca_participants (ludoteca_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |constraint| {
                if constraint.is_some_and(|c| c.contains("user_id")) {
                    DomainError::UserNotFound(user_id)
                } else {
                    DomainError::LudotecaEntryNotFound(id)
                }
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn leave(&self, id: i64, user_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM ludoteca_participants
            WHERE ludoteca_id = $1 AND user_id = $2
            ",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_image(&self, id: i64, image_url: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE ludoteca SET image_url = $2 WHERE id = $1
            ",
        )
        .bind(id)
        .bind(image_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LudotecaEntryNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM ludoteca WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LudotecaEntryNotFound(id));
        }

        Ok(())
    }
}
