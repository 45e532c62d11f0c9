//! PostgreSQL implementation of AchievementRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::Achievement;
use club_core::error::DomainError;
use club_core::traits::{AchievementRepository, RepoResult};

use crate::models::AchievementModel;

use super::error::{map_db_error, map_fk_violation, map_unique_violation};

/// PostgreSQL implementation of AchievementRepository
#[derive(Clone)]
pub struct PgAchievementRepository {
    pool: PgPool,
}

impl PgAchievementRepository {
    /// Create a new PgAchievementRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementRepository for PgAchievementRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Achievement>> {
        let rows = sqlx::query_as::<_, AchievementModel>(
            r"
            SELECT id, name, description, avatar_url
            FROM achievements
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Achievement::from).collect())
    }

    #[instrument(skip(self))]
    async fn for_user(&self, user_id: i64) -> RepoResult<Vec<Achievement>> {
        let rows = sqlx::query_as::<_, AchievementModel>(
            r"
            SELECT a.id, a.name, a.description, a.avatar_url
            FROM user_achievements ua
            JOIN achievements a ON a.id = ua.achievement_id
            WHERE ua.user_id = $1
            ORDER BY a.id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Achievement::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        name: &str,
        description: &str,
        avatar_url: Option<&str>,
    ) -> RepoResult<Achievement> {
        let model = sqlx::query_as::<_, AchievementModel>(
            r"
            INSERT INTO achievements (name, description, avatar_url)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, avatar_url
            ",
        )
        .bind(name)
        .bind(description)
        .bind(avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AchievementAlreadyExists))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AchievementNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn grant(&self, user_id: i64, achievement_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_achievements (user_id, achievement_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(achievement_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |constraint| {
                if constraint.is_some_and(|c| c.contains("user_id")) {
                    DomainError::UserNotFound(user_id)
                } else {
                    DomainError::AchievementNotFound(achievement_id)
                }
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke(&self, user_id: i64, achievement_id: i64) -> RepoResult<()> {
        // Revoking an assignment that does not exist is a no-op
        sqlx::query(
            r"
            DELETE FROM user_achievements
            WHERE user_id = $1 AND achievement_id = $2
            ",
        )
        .bind(user_id)
        .bind(achievement_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
