//! Membership command/query handlers.
//!
//! One handler per operation. Each handler owns its dependencies behind
//! `Arc<dyn Trait>` ports and enforces the lifecycle invariants:
//! uniqueness on register, ownership on reads and mutations.

mod accumulate_point;
mod get_membership_detail;
mod list_memberships;
mod record_purchase;
mod register_membership;
mod remove_membership;

pub use accumulate_point::{AccumulatePointCommand, AccumulatePointHandler};
pub use get_membership_detail::{
    GetMembershipDetailHandler, GetMembershipDetailQuery, MembershipDetail,
};
pub use list_memberships::{ListMembershipsHandler, ListMembershipsQuery};
pub use record_purchase::{RecordPurchaseCommand, RecordPurchaseHandler};
pub use register_membership::{
    RegisterMembershipCommand, RegisterMembershipHandler, RegisterMembershipResult,
};
pub use remove_membership::{RemoveMembershipCommand, RemoveMembershipHandler};

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory store shared by the handler test modules.

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::foundation::{
        DomainError, ErrorCode, MembershipId, Timestamp, UserId,
    };
    use crate::domain::membership::{Membership, MembershipType, NewMembership};
    use crate::ports::MembershipStore;

    /// Vec-backed store mirroring the uniqueness behavior of the
    /// Postgres adapter.
    pub struct InMemoryMembershipStore {
        memberships: Mutex<Vec<Membership>>,
        fail_all: bool,
        duplicate_on_insert: bool,
    }

    impl InMemoryMembershipStore {
        pub fn new() -> Self {
            Self {
                memberships: Mutex::new(Vec::new()),
                fail_all: false,
                duplicate_on_insert: false,
            }
        }

        pub fn with_membership(membership: Membership) -> Self {
            Self {
                memberships: Mutex::new(vec![membership]),
                fail_all: false,
                duplicate_on_insert: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                memberships: Mutex::new(Vec::new()),
                fail_all: true,
                duplicate_on_insert: false,
            }
        }

        /// Simulates the lost race: the duplicate check sees no row but
        /// the unique constraint rejects the insert.
        pub fn racing_duplicate() -> Self {
            Self {
                memberships: Mutex::new(Vec::new()),
                fail_all: false,
                duplicate_on_insert: true,
            }
        }

        pub fn memberships(&self) -> Vec<Membership> {
            self.memberships.lock().unwrap().clone()
        }

        fn check_failure(&self) -> Result<(), DomainError> {
            if self.fail_all {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated store failure",
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl MembershipStore for InMemoryMembershipStore {
        async fn find_by_user_and_type(
            &self,
            user_id: &UserId,
            membership_type: MembershipType,
        ) -> Result<Option<Membership>, DomainError> {
            self.check_failure()?;
            Ok(self
                .memberships
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.user_id == user_id && m.membership_type == membership_type)
                .cloned())
        }

        async fn find_by_id(
            &self,
            id: &MembershipId,
        ) -> Result<Option<Membership>, DomainError> {
            self.check_failure()?;
            Ok(self
                .memberships
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.id == id)
                .cloned())
        }

        async fn find_all_by_user(
            &self,
            user_id: &UserId,
        ) -> Result<Vec<Membership>, DomainError> {
            self.check_failure()?;
            Ok(self
                .memberships
                .lock()
                .unwrap()
                .iter()
                .filter(|m| &m.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn insert(&self, candidate: NewMembership) -> Result<Membership, DomainError> {
            self.check_failure()?;
            let mut memberships = self.memberships.lock().unwrap();
            let duplicate = self.duplicate_on_insert
                || memberships.iter().any(|m| {
                    m.user_id == candidate.user_id
                        && m.membership_type == candidate.membership_type
                });
            if duplicate {
                return Err(DomainError::new(
                    ErrorCode::DuplicateMembership,
                    "Membership already registered for this user and provider",
                ));
            }
            let now = Timestamp::now();
            let membership = Membership {
                id: MembershipId::new(),
                user_id: candidate.user_id,
                membership_type: candidate.membership_type,
                point: candidate.point,
                created_at: now,
                updated_at: now,
            };
            memberships.push(membership.clone());
            Ok(membership)
        }

        async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
            self.check_failure()?;
            let mut memberships = self.memberships.lock().unwrap();
            match memberships.iter().position(|m| m.id == membership.id) {
                Some(pos) => {
                    memberships[pos] = membership.clone();
                    Ok(())
                }
                None => Err(DomainError::new(
                    ErrorCode::MembershipNotFound,
                    "Membership not found",
                )),
            }
        }

        async fn delete_by_id(&self, id: &MembershipId) -> Result<(), DomainError> {
            self.check_failure()?;
            let mut memberships = self.memberships.lock().unwrap();
            match memberships.iter().position(|m| &m.id == id) {
                Some(pos) => {
                    memberships.remove(pos);
                    Ok(())
                }
                None => Err(DomainError::new(
                    ErrorCode::MembershipNotFound,
                    "Membership not found",
                )),
            }
        }
    }
}
