//! Ludoteca entity - a game-library entry members mark interest in

use chrono::{DateTime, Utc};

/// A game on the ludoteca interest board
///
/// Shares the board shape with [`super::Activity`] but lives in its own
/// table and carries its own participant relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LudotecaEntry {
    pub id: i64,
    pub title: String,
    pub kind: String,
    pub description: String,
    pub participants: Option<i32>,
    pub duration: Option<i32>,
    pub image_url: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}
