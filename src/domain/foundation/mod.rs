//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the loyalty membership domain.

mod errors;
mod ids;
mod point;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MembershipId, UserId};
pub use point::Point;
pub use timestamp::Timestamp;
