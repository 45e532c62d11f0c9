//! PostgreSQL implementation of UserRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use club_core::entities::{Achievement, ProfilePatch, User};
use club_core::error::DomainError;
use club_core::traits::{MemberOverview, RepoResult, UserRepository};
use club_core::value_objects::Role;

use crate::models::{RoleAssignmentRow, UserAchievementRow, UserModel};

use super::error::{map_db_error, map_unique_violation, parse_role};

const USER_COLUMNS: &str = "id, name, email, phone, dni, avatar_url, score, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, phone, dni, avatar_url, score, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, phone, dni, avatar_url, score, created_at, updated_at
            FROM users
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn identity_exists(
        &self,
        name: &str,
        email: &str,
        dni: Option<&str>,
    ) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE name = $1 OR email = $2 OR ($3::TEXT IS NOT NULL AND dni = $3)
            )
            ",
        )
        .bind(name)
        .bind(email)
        .bind(dni)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        dni: Option<&str>,
        password_hash: &str,
    ) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (name, email, phone, dni, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, dni, avatar_url, score, created_at, updated_at
            ",
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(dni)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyExists))?;

        Ok(model.into())
    }

    #[instrument(skip(self, patch))]
    async fn update_profile(&self, id: i64, patch: &ProfilePatch) -> RepoResult<User> {
        let mut builder = QueryBuilder::new("UPDATE users SET updated_at = NOW()");

        if let Some(name) = &patch.name {
            builder.push(", name = ").push_bind(name);
        }
        if let Some(email) = &patch.email {
            builder.push(", email = ").push_bind(email);
        }
        if let Some(phone) = &patch.phone {
            builder.push(", phone = ").push_bind(phone);
        }
        if let Some(dni) = &patch.dni {
            builder.push(", dni = ").push_bind(dni);
        }
        if let Some(hash) = &patch.password_hash {
            builder.push(", password_hash = ").push_bind(hash);
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING ").push(USER_COLUMNS);

        let model = builder
            .build_query_as::<UserModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyExists))?
            .ok_or(DomainError::UserNotFound(id))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn set_avatar(&self, id: i64, avatar_url: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET avatar_url = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(avatar_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list_members(&self) -> RepoResult<Vec<MemberOverview>> {
        let users = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, phone, dni, avatar_url, score, created_at, updated_at
            FROM users
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let assignments = sqlx::query_as::<_, RoleAssignmentRow>(
            r"
            SELECT ur.user_id, r.name AS role_name
            FROM user_roles ur
            JOIN roles r ON r.id = ur.role_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let awarded = sqlx::query_as::<_, UserAchievementRow>(
            r"
            SELECT ua.user_id, a.id, a.name, a.description, a.avatar_url
            FROM user_achievements ua
            JOIN achievements a ON a.id = ua.achievement_id
            ORDER BY a.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut roles_by_user: HashMap<i64, Vec<Role>> = HashMap::new();
        for row in assignments {
            roles_by_user
                .entry(row.user_id)
                .or_default()
                .push(parse_role(&row.role_name)?);
        }

        let mut achievements_by_user: HashMap<i64, Vec<Achievement>> = HashMap::new();
        for row in awarded {
            achievements_by_user
                .entry(row.user_id)
                .or_default()
                .push(row.into());
        }

        Ok(users
            .into_iter()
            .map(|model| {
                let roles = roles_by_user.remove(&model.id).unwrap_or_default();
                let achievements = achievements_by_user.remove(&model.id).unwrap_or_default();
                MemberOverview {
                    role: Role::effective(roles),
                    achievements,
                    user: model.into(),
                }
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Join rows go first; the schema also cascades, but the deletion
        // order is part of the contract.
        for sql in [
            "DELETE FROM user_roles WHERE user_id = $1",
            "DELETE FROM user_achievements WHERE user_id = $1",
            "DELETE FROM activity_participants WHERE user_id = $1",
            "DELETE FROM ludoteca_participants WHERE user_id = $1",
            "DELETE FROM user_status WHERE user_id = $1",
        ] {
            sqlx::query(sql)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
