//! User participation status flags

use crate::error::DomainError;

/// Per-member participation flags, created alongside the account
///
/// - `attendance`, `payment`: 0 or 1
/// - `transport`: 0 none, 1 has own, 2 offers seats to others
/// - `food`: 0 none, 1 self-managed, 2 offers to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStatus {
    pub attendance: i16,
    pub payment: i16,
    pub transport: i16,
    pub food: i16,
}

/// Partial status update; `None` keeps the stored value
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusPatch {
    pub attendance: Option<i16>,
    pub payment: Option<i16>,
    pub transport: Option<i16>,
    pub food: Option<i16>,
}

impl StatusPatch {
    /// Range-check every provided flag
    ///
    /// # Errors
    /// Returns a validation error when a flag is outside its allowed range.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_flag("attendance", self.attendance, 1)?;
        check_flag("payment", self.payment, 1)?;
        check_flag("transport", self.transport, 2)?;
        check_flag("food", self.food, 2)?;
        Ok(())
    }
}

fn check_flag(field: &str, value: Option<i16>, max: i16) -> Result<(), DomainError> {
    match value {
        Some(v) if !(0..=max).contains(&v) => Err(DomainError::ValidationError(format!(
            "{field} must be between 0 and {max}"
        ))),
        _ => Ok(()),
    }
}
