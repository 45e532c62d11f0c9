//! Role hierarchy - ordered privilege levels for members
//!
//! The hierarchy is total: ADMIN implies ORGANIZER-level and USER-level
//! permissions wherever checks use "is at least".

use serde::{Deserialize, Serialize};

/// Member role, ordered by privilege: USER < ORGANIZER < ADMIN
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Organizer,
    Admin,
}

impl Role {
    /// Canonical storage name for this role
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Organizer => "ORGANIZER",
            Self::Admin => "ADMIN",
        }
    }

    /// Compute the effective role from a set of assignments
    ///
    /// A user may hold zero or more role assignments; the effective role is
    /// the highest one, defaulting to USER when none exist.
    pub fn effective(assigned: impl IntoIterator<Item = Role>) -> Self {
        assigned.into_iter().max().unwrap_or_default()
    }

    /// Check whether this role grants at least the given level
    #[inline]
    #[must_use]
    pub fn is_at_least(self, required: Role) -> bool {
        self >= required
    }

    /// Check for the ADMIN role
    #[inline]
    #[must_use]
    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name does not match the known hierarchy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "ORGANIZER" => Ok(Self::Organizer),
            "ADMIN" => Ok(Self::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}
