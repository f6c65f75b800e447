//! Membership entity.
//!
//! A Membership binds one user to one loyalty-program provider with an
//! accumulated point balance. Each user has at most one Membership per
//! provider.
//!
//! # Invariants
//!
//! - `id` is globally unique
//! - `(user_id, membership_type)` is unique, enforced at the store level
//! - `point` is never negative (carried by the `Point` value object)
//! - Only the owning `user_id` may mutate or delete a Membership

use crate::domain::foundation::{MembershipId, Point, Timestamp, UserId};
use serde::Serialize;

use super::MembershipType;

/// Candidate for a new enrollment, before the store assigns identity.
///
/// The store populates `id`, `created_at`, and `updated_at` on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMembership {
    pub user_id: UserId,
    pub membership_type: MembershipType,
    pub point: Point,
}

impl NewMembership {
    pub fn new(user_id: UserId, membership_type: MembershipType, point: Point) -> Self {
        Self {
            user_id,
            membership_type,
            point,
        }
    }
}

/// Membership entity - one (user, provider) enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    /// Unique identifier, assigned by the store on insert.
    pub id: MembershipId,

    /// User who owns this membership.
    pub user_id: UserId,

    /// Loyalty program provider. Immutable after creation.
    pub membership_type: MembershipType,

    /// Accumulated reward point balance.
    pub point: Point,

    /// When the membership was created.
    pub created_at: Timestamp,

    /// When the membership was last updated.
    pub updated_at: Timestamp,
}

impl Membership {
    /// Checks whether the given caller owns this membership.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Adds the given points to the balance and refreshes `updated_at`.
    ///
    /// The amount is already validated non-negative by the `Point` type,
    /// so the balance can only grow.
    pub fn accumulate(&mut self, amount: Point) {
        self.point = self.point.add(amount);
        self.updated_at = Timestamp::now();
    }
}
