//! PostgreSQL implementation of StatusRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{StatusPatch, UserStatus};
use club_core::error::DomainError;
use club_core::traits::{RepoResult, StatusRepository};

use crate::models::StatusModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of StatusRepository
#[derive(Clone)]
pub struct PgStatusRepository {
    pool: PgPool,
}

impl PgStatusRepository {
    /// Create a new PgStatusRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for PgStatusRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: i64) -> RepoResult<Option<UserStatus>> {
        let result = sqlx::query_as::<_, StatusModel>(
            r"
            SELECT attendance, payment, transport, food
            FROM user_status
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserStatus::from))
    }

    #[instrument(skip(self))]
    async fn create_default(&self, user_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_status (user_id)
            VALUES ($1)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, |_| DomainError::UserNotFound(user_id)))?;

        Ok(())
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, user_id: i64, patch: &StatusPatch) -> RepoResult<UserStatus> {
        let result = sqlx::query_as::<_, StatusModel>(
            r"
            UPDATE user_status
            SET attendance = COALESCE($2, attendance),
                payment    = COALESCE($3, payment),
                transport  = COALESCE($4, transport),
                food       = COALESCE($5, food),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING attendance, payment, transport, food
            ",
        )
        .bind(user_id)
        .bind(patch.attendance)
        .bind(patch.payment)
        .bind(patch.transport)
        .bind(patch.food)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(UserStatus::from)
            .ok_or(DomainError::StatusNotFound(user_id))
    }
}
