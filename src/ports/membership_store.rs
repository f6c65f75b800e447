//! Membership store port.
//!
//! Defines the persistence contract the membership handlers depend on.
//! Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Store-assigned identity**: `insert` takes a candidate and returns
//!   the persisted entity with id and timestamps populated
//! - **Unique constraint**: at most one row per (user_id, membership_type);
//!   implementations must turn a racing second insert into a
//!   `DuplicateMembership` error rather than a second row
//! - **No cross-call transactions**: each method is a single unit of work

use crate::domain::foundation::{DomainError, MembershipId, UserId};
use crate::domain::membership::{Membership, MembershipType, NewMembership};
use async_trait::async_trait;

/// Store port for Membership persistence.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Find the membership for a (user, provider) pair.
    ///
    /// Returns `None` if the user is not enrolled with that provider.
    async fn find_by_user_and_type(
        &self,
        user_id: &UserId,
        membership_type: MembershipType,
    ) -> Result<Option<Membership>, DomainError>;

    /// Find a membership by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError>;

    /// Find all memberships owned by a user. Order is not significant.
    async fn find_all_by_user(&self, user_id: &UserId) -> Result<Vec<Membership>, DomainError>;

    /// Insert a new membership, assigning id and timestamps.
    ///
    /// # Errors
    ///
    /// - `DuplicateMembership` if the (user_id, membership_type) pair is
    ///   already enrolled (unique constraint)
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, candidate: NewMembership) -> Result<Membership, DomainError>;

    /// Persist the mutable fields of an existing membership
    /// (point balance and updated_at).
    ///
    /// # Errors
    ///
    /// - `MembershipNotFound` if the row no longer exists
    /// - `DatabaseError` on persistence failure
    async fn update(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Delete a membership by ID.
    ///
    /// Callers confirm existence first; a missing row is reported as
    /// `MembershipNotFound` only when a concurrent delete won the race.
    async fn delete_by_id(&self, id: &MembershipId) -> Result<(), DomainError>;
}
