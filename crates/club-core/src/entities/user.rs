//! User entity - a registered club member

use chrono::{DateTime, Utc};

/// A registered member account
///
/// The password hash is deliberately not part of the entity; it only moves
/// between the auth service and the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
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

impl User {
    /// Check whether this user created the given resource
    #[inline]
    #[must_use]
    pub fn owns(&self, created_by: Option<i64>) -> bool {
        created_by == Some(self.id)
    }
}

/// Partial profile update, applied field-by-field
///
/// `None` leaves the stored value untouched. The password travels separately
/// as a pre-computed hash.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dni: Option<String>,
    pub password_hash: Option<String>,
}

impl ProfilePatch {
    /// True when no field would change
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.dni.is_none()
            && self.password_hash.is_none()
    }
}
