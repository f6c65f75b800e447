//! Point balance value object.
//!
//! A `Point` is a non-negative integer reward balance. Negative values are
//! unrepresentable once constructed, which is how the `point >= 0` invariant
//! is carried through the rest of the domain.

use serde::Serialize;

use super::ValidationError;

/// Non-negative reward point balance.
///
/// Not `Deserialize`: inbound values must come through `try_new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Point(i64);

impl Point {
    /// Zero balance.
    pub const ZERO: Point = Point(0);

    /// Creates a new Point, returning error if negative.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::negative("point", value));
        }
        Ok(Self(value))
    }

    /// Returns the raw balance.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns a new balance increased by `other`.
    ///
    /// Saturates at `i64::MAX`; both operands are non-negative so the
    /// result can never go below zero.
    pub fn add(&self, other: Point) -> Point {
        Point(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
