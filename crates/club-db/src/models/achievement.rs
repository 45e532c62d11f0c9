//! Achievement row models

use club_core::Achievement;
use sqlx::FromRow;

/// Database model for the achievements table
#[derive(Debug, Clone, FromRow)]
pub struct AchievementModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub avatar_url: Option<String>,
}

impl From<AchievementModel> for Achievement {
    fn from(m: AchievementModel) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            avatar_url: m.avatar_url,
        }
    }
}

/// An awarded achievement scoped to its owner, for bulk member listings
#[derive(Debug, Clone, FromRow)]
pub struct UserAchievementRow {
    pub user_id: i64,
    pub id: i64,
    pub name: String,
    pub description: String,
    pub avatar_url: Option<String>,
}

impl From<UserAchievementRow> for Achievement {
    fn from(r: UserAchievementRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            avatar_url: r.avatar_url,
        }
    }
}
