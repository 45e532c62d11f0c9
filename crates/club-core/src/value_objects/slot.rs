//! Calendar slot arithmetic
//!
//! The weekly grid runs on a fixed 17-hour cycle from noon through 4am,
//! wrapping midnight. Hours are stored as raw clock values (12..23, 0..4);
//! overlap comparisons work on the hour's offset within the cycle so that
//! 23:00-01:00 and 00:00-02:00 are correctly seen as colliding.

use crate::error::DomainError;

/// The canonical hour cycle of a calendar day, in display order.
pub const HOUR_CYCLE: [i32; 17] = [
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 0, 1, 2, 3, 4,
];

/// Offset of a clock hour within the cycle, or `None` when the hour is not
/// part of it (5..=11).
#[must_use]
pub fn slot_offset(hour: i32) -> Option<i32> {
    match hour {
        12..=23 => Some(hour - 12),
        0..=4 => Some(hour + 12),
        _ => None,
    }
}

/// A validated half-open hour range within one (day, zone) column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    start_hour: i32,
    end_hour: i32,
    start_offset: i32,
    end_offset: i32,
}

impl SlotRange {
    /// Validate an hour range against the cycle
    ///
    /// # Errors
    /// Returns a validation error if either hour is outside the cycle or the
    /// range is empty or inverted in cycle order.
    pub fn new(start_hour: i32, end_hour: i32) -> Result<Self, DomainError> {
        let start_offset = slot_offset(start_hour).ok_or_else(|| {
            DomainError::ValidationError(format!("start_hour {start_hour} is outside the schedule"))
        })?;
        let end_offset = slot_offset(end_hour).ok_or_else(|| {
            DomainError::ValidationError(format!("end_hour {end_hour} is outside the schedule"))
        })?;

        if start_offset >= end_offset {
            return Err(DomainError::ValidationError(format!(
                "hour range {start_hour}-{end_hour} is empty or inverted"
            )));
        }

        Ok(Self {
            start_hour,
            end_hour,
            start_offset,
            end_offset,
        })
    }

    #[must_use]
    pub fn start_hour(&self) -> i32 {
        self.start_hour
    }

    #[must_use]
    pub fn end_hour(&self) -> i32 {
        self.end_hour
    }

    /// Check whether two ranges share at least one hour
    #[must_use]
    pub fn overlaps(&self, other: &SlotRange) -> bool {
        self.start_offset < other.end_offset && other.start_offset < self.end_offset
    }
}
