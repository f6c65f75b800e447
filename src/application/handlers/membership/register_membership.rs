//! RegisterMembershipHandler - Command handler for new enrollments.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, MembershipId, Point, UserId};
use crate::domain::membership::{MembershipError, MembershipType, NewMembership};
use crate::ports::MembershipStore;

/// Command to register a membership for a (user, provider) pair.
#[derive(Debug, Clone)]
pub struct RegisterMembershipCommand {
    pub user_id: UserId,
    pub membership_type: MembershipType,
    pub point: Point,
}

/// Result of a successful registration: the persisted identity and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterMembershipResult {
    pub id: MembershipId,
    pub membership_type: MembershipType,
}

/// Handler for registering new memberships.
pub struct RegisterMembershipHandler {
    store: Arc<dyn MembershipStore>,
}

impl RegisterMembershipHandler {
    pub fn new(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RegisterMembershipCommand,
    ) -> Result<RegisterMembershipResult, MembershipError> {
        // 1. Reject an already-enrolled (user, provider) pair
        if self
            .store
            .find_by_user_and_type(&cmd.user_id, cmd.membership_type)
            .await?
            .is_some()
        {
            return Err(MembershipError::duplicate(
                cmd.user_id,
                cmd.membership_type,
            ));
        }

        // 2. Insert; the store assigns id and timestamps. A concurrent
        //    register that slipped past the check above trips the store's
        //    unique constraint and must still surface as Duplicate.
        let candidate =
            NewMembership::new(cmd.user_id.clone(), cmd.membership_type, cmd.point);
        let membership = self.store.insert(candidate).await.map_err(|err| {
            if err.code == ErrorCode::DuplicateMembership {
                MembershipError::duplicate(cmd.user_id.clone(), cmd.membership_type)
            } else {
                MembershipError::from(err)
            }
        })?;

        Ok(RegisterMembershipResult {
            id: membership.id,
            membership_type: membership.membership_type,
        })
    }
}
