//! PostgreSQL implementation of RoleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::error::DomainError;
use club_core::traits::{RepoResult, RoleRepository};
use club_core::value_objects::Role;

use super::error::{map_db_error, map_fk_violation, parse_role};

/// PostgreSQL implementation of RoleRepository
#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    /// Create a new PgRoleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    #[instrument(skip(self))]
    async fn roles_for_user(&self, user_id: i64) -> RepoResult<Vec<Role>> {
        let names = sqlx::query_scalar::<_, String>(
            r"
            SELECT r.name
            FROM user_roles ur
            JOIN roles r ON r.id = ur.role_id
            WHERE ur.user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        names.iter().map(|name| parse_role(name)).collect()
    }

    #[instrument(skip(self))]
    async fn assign(&self, user_id: i64, role: Role) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_roles (user_id, role_id)
            SELECT $1, id FROM roles WHERE name = $2
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, |_| DomainError::UserNotFound(user_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn replace(&self, user_id: i64, role: Role) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO user_roles (user_id, role_id)
            SELECT $1, id FROM roles WHERE name = $2
            ",
        )
        .bind(user_id)
        .bind(role.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, |_| DomainError::UserNotFound(user_id)))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
