//! User database model

use chrono::{DateTime, Utc};
use club_core::User;
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dni: Option<String>,
    pub avatar_url: Option<String>,
    pub score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserModel> for User {
    fn from(m: UserModel) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            dni: m.dni,
            avatar_url: m.avatar_url,
            score: m.score,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// One role assignment, used to derive effective roles in bulk
#[derive(Debug, Clone, FromRow)]
pub struct RoleAssignmentRow {
    pub user_id: i64,
    pub role_name: String,
}
