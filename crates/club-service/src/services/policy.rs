//! Role policy checks used by the services
//!
//! Authorization is decided here, at the use-case boundary; the session
//! resolver only establishes identity. A failed check surfaces as 403 with
//! no further detail.

use club_core::{DomainError, Role};

use super::error::ServiceResult;

/// The authenticated caller, as established by the session resolver
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

impl Actor {
    /// Require the actor to hold at least the given role
    pub fn require_at_least(&self, required: Role) -> ServiceResult<()> {
        if self.role.is_at_least(required) {
            Ok(())
        } else {
            Err(DomainError::RoleRequired(required).into())
        }
    }

    /// Require the ADMIN role
    pub fn require_admin(&self) -> ServiceResult<()> {
        self.require_at_least(Role::Admin)
    }

    /// Require ownership of the resource, or at least the given role
    pub fn require_owner_or(&self, created_by: Option<i64>, fallback: Role) -> ServiceResult<()> {
        if created_by == Some(self.id) || self.role.is_at_least(fallback) {
            Ok(())
        } else {
            Err(DomainError::NotOwner.into())
        }
    }
}
