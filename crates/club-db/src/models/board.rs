//! Shared row shapes for the activities and ludoteca boards
//!
//! Both tables have the same columns, so one model serves the listing
//! queries of either repository.

use chrono::{DateTime, Utc};
use club_core::{Activity, LudotecaEntry, Participant};
use sqlx::FromRow;

/// A board row joined with its creator name and the viewer's join flag
#[derive(Debug, Clone, FromRow)]
pub struct BoardRow {
    pub id: i64,
    pub title: String,
    pub kind: String,
    pub description: String,
    pub participants: Option<i32>,
    pub duration: Option<i32>,
    pub image_url: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub creator_name: Option<String>,
    pub is_joined: bool,
}

impl From<&BoardRow> for Activity {
    fn from(r: &BoardRow) -> Self {
        Self {
            id: r.id,
            title: r.title.clone(),
            kind: r.kind.clone(),
            description: r.description.clone(),
            participants: r.participants,
            duration: r.duration,
            image_url: r.image_url.clone(),
            created_by: r.created_by,
            created_at: r.created_at,
        }
    }
}

impl From<&BoardRow> for LudotecaEntry {
    fn from(r: &BoardRow) -> Self {
        Self {
            id: r.id,
            title: r.title.clone(),
            kind: r.kind.clone(),
            description: r.description.clone(),
            participants: r.participants,
            duration: r.duration,
            image_url: r.image_url.clone(),
            created_by: r.created_by,
            created_at: r.created_at,
        }
    }
}

/// A participant row scoped to its parent board item
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantRow {
    pub parent_id: i64,
    pub user_id: i64,
    pub name: String,
    pub avatar_url: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl From<ParticipantRow> for Participant {
    fn from(r: ParticipantRow) -> Self {
        Self {
            user_id: r.user_id,
            name: r.name,
            avatar_url: r.avatar_url,
            joined_at: r.joined_at,
        }
    }
}
