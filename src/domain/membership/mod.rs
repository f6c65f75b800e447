//! Membership domain - enrollment lifecycle and point balance.

mod entity;
mod errors;
mod provider;

pub use entity::{Membership, NewMembership};
pub use errors::MembershipError;
pub use provider::MembershipType;
