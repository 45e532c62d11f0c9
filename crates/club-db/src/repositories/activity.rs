//! PostgreSQL implementation of ActivityRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{Activity, Participant};
use club_core::error::DomainError;
use club_core::traits::{ActivityDetail, ActivityRepository, NewBoardItem, RepoResult};

use crate::models::{BoardRow, ParticipantRow};

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of ActivityRepository
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    /// Create a new PgActivityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Batch-load participant lists for a set of activities
    async fn participants_for(
        &self,
        ids: &[i64],
    ) -> RepoResult<HashMap<i64, Vec<Participant>>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r"
            SELECT ap.activity_id AS parent_id, u.id AS user_id, u.name, u.avatar_url, ap.joined_at
            FROM activity_participants ap
            JOIN users u ON u.id = ap.user_id
            WHERE ap.activity_id = ANY($1)
            ORDER BY ap.joined_at, u.id
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

fn assemble(row: &BoardRow, participants: Vec<Participant>) -> ActivityDetail {
    ActivityDetail {
        activity: Activity::from(row),
        creator_name: row.creator_name.clone(),
        is_joined: row.is_joined,
        participants,
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self))]
    async fn list(&self, viewer_id: i64) -> RepoResult<Vec<ActivityDetail>> {
        let rows = sqlx::query_as::<_, BoardRow>(
            r"
            SELECT a.id, a.title, a.kind, a.description, a.participants, a.duration,
                   a.image_url, a.created_by, a.created_at,
                   cu.name AS creator_name,
                   EXISTS(
                       SELECT 1 FROM activity_participants ap
                       WHERE ap.activity_id = a.id AND ap.user_id = $1
                   ) AS is_joined
            FROM activities a
            LEFT JOIN users cu ON cu.id = a.created_by
            ORDER BY a.id DESC
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
    async fn find_detail(&self, id: i64, viewer_id: i64) -> RepoResult<Option<ActivityDetail>> {
        let row = sqlx::query_as::<_, BoardRow>(
            r"
            SELECT a.id, a.title, a.kind, a.description, a.participants, a.duration,
                   a.image_url, a.created_by, a.created_at,
                   cu.name AS creator_name,
                   EXISTS(
                       SELECT 1 FROM activity_participants ap
                       WHERE ap.activity_id = a.id AND ap.user_id = $2
                   ) AS is_joined
            FROM activities a
            LEFT JOIN users cu ON cu.id = a.created_by
            WHERE a.id = $1
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
    async fn create(&self, item: &NewBoardItem) -> RepoResult<Activity> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r"
            INSERT INTO activities (title, kind, description, participants, duration, image_url, created_by)
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

        Ok(Activity {
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
            SELECT created_by FROM activities WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::ActivityNotFound(id))
    }

    #[instrument(skip(self))]
    async fn join(&self, id: i64, user_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO activity_participants (activity_id, user_id)
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
                    DomainError::ActivityNotFound(id)
                }
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn leave(&self, id: i64, user_id: i64) -> RepoResult<()> {
        // Leaving an activity the user never joined is a no-op
        sqlx::query(
            r"
            DELETE FROM activity_participants
            WHERE activity_id = $1 AND user_id = $2
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
            UPDATE activities SET image_url = $2 WHERE id = $1
            ",
        )
        .bind(id)
        .bind(image_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ActivityNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ActivityNotFound(id));
        }

        Ok(())
    }
}
