//! GetMembershipDetailHandler - Query handler for a single membership.

use std::sync::Arc;

use crate::domain::foundation::{MembershipId, Point, Timestamp, UserId};
use crate::domain::membership::{Membership, MembershipError, MembershipType};
use crate::ports::MembershipStore;

/// Query for one membership, addressed by id.
#[derive(Debug, Clone)]
pub struct GetMembershipDetailQuery {
    pub id: MembershipId,
    pub user_id: UserId,
}

/// Read model returned by detail and list queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipDetail {
    pub id: MembershipId,
    pub membership_type: MembershipType,
    pub point: Point,
    pub created_at: Timestamp,
}

impl From<Membership> for MembershipDetail {
    fn from(membership: Membership) -> Self {
        Self {
            id: membership.id,
            membership_type: membership.membership_type,
            point: membership.point,
            created_at: membership.created_at,
        }
    }
}

/// Handler for the id-addressed detail read.
///
/// Ownership is enforced on this read: a caller who does not own the
/// membership gets `NotOwner`, the same as on mutation.
pub struct GetMembershipDetailHandler {
    store: Arc<dyn MembershipStore>,
}

impl GetMembershipDetailHandler {
    pub fn new(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetMembershipDetailQuery,
    ) -> Result<MembershipDetail, MembershipError> {
        let membership = self
            .store
            .find_by_id(&query.id)
            .await?
            .ok_or(MembershipError::NotFound(query.id))?;

        if !membership.is_owned_by(&query.user_id) {
            return Err(MembershipError::not_owner(query.id, query.user_id));
        }

        Ok(MembershipDetail::from(membership))
    }
}
