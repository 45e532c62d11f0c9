//! Participant join row - a member who joined an activity or marked
//! interest in a ludoteca entry

use chrono::{DateTime, Utc};

/// A participant of an activity or ludoteca entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: i64,
    pub name: String,
    pub avatar_url: Option<String>,
    pub joined_at: DateTime<Utc>,
}
