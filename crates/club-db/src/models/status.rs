//! User status row model

use club_core::UserStatus;
use sqlx::FromRow;

/// Database model for the user_status table
#[derive(Debug, Clone, FromRow)]
pub struct StatusModel {
    pub attendance: i16,
    pub payment: i16,
    pub transport: i16,
    pub food: i16,
}

impl From<StatusModel> for UserStatus {
    fn from(m: StatusModel) -> Self {
        Self {
            attendance: m.attendance,
            payment: m.payment,
            transport: m.transport,
            food: m.food,
        }
    }
}
