//! AccumulatePointHandler - Command handler for direct point accrual.
//!
//! Adds a caller-supplied point value to the balance. Deriving points from
//! a purchase price is a separate concern (see `RecordPurchaseHandler`);
//! this operation trusts the given amount.

use std::sync::Arc;

use crate::domain::foundation::{MembershipId, Point, UserId};
use crate::domain::membership::MembershipError;
use crate::ports::MembershipStore;

/// Command to add points to a membership balance.
#[derive(Debug, Clone)]
pub struct AccumulatePointCommand {
    pub id: MembershipId,
    pub user_id: UserId,
    pub point: Point,
}

/// Handler for accumulating points on an owned membership.
pub struct AccumulatePointHandler {
    store: Arc<dyn MembershipStore>,
}

impl AccumulatePointHandler {
    pub fn new(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AccumulatePointCommand) -> Result<(), MembershipError> {
        let mut membership = self
            .store
            .find_by_id(&cmd.id)
            .await?
            .ok_or(MembershipError::NotFound(cmd.id))?;

        if !membership.is_owned_by(&cmd.user_id) {
            return Err(MembershipError::not_owner(cmd.id, cmd.user_id));
        }

        membership.accumulate(cmd.point);
        self.store.update(&membership).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::membership::test_support::InMemoryMembershipStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::membership::{Membership, MembershipType};

    fn test_membership(user: &str, point: i64) -> Membership {
        let now = Timestamp::now();
        Membership {
            id: MembershipId::new(),
            user_id: UserId::new(user).unwrap(),
            membership_type: MembershipType::Naver,
            point: Point::try_new(point).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    fn cmd(id: MembershipId, user: &str, point: i64) -> AccumulatePointCommand {
        AccumulatePointCommand {
            id,
            user_id: UserId::new(user).unwrap(),
            point: Point::try_new(point).unwrap(),
        }
    }

    #[tokio::test]
    async fn increases_balance_by_exactly_the_given_amount() {
        let membership = test_membership("12345", 10000);
        let id = membership.id;
        let store = Arc::new(InMemoryMembershipStore::with_membership(membership));
        let handler = AccumulatePointHandler::new(store.clone());

        handler.handle(cmd(id, "12345", 5000)).await.unwrap();

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.point.value(), 15000);
    }

    #[tokio::test]
    async fn fails_not_found_for_unknown_id() {
        let store = Arc::new(InMemoryMembershipStore::new());
        let handler = AccumulatePointHandler::new(store);

        let result = handler.handle(cmd(MembershipId::new(), "12345", 100)).await;
        assert!(matches!(result, Err(MembershipError::NotFound(_))));
    }

    #[tokio::test]
    async fn non_owner_fails_and_balance_is_unchanged() {
        let membership = test_membership("12345", 10000);
        let id = membership.id;
        let store = Arc::new(InMemoryMembershipStore::with_membership(membership));
        let handler = AccumulatePointHandler::new(store.clone());

        let result = handler.handle(cmd(id, "99999", 5000)).await;

        assert!(matches!(result, Err(MembershipError::NotOwner { .. })));
        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.point.value(), 10000);
    }

    #[tokio::test]
    async fn repeated_accumulation_compounds() {
        let membership = test_membership("12345", 0);
        let id = membership.id;
        let store = Arc::new(InMemoryMembershipStore::with_membership(membership));
        let handler = AccumulatePointHandler::new(store.clone());

        handler.handle(cmd(id, "12345", 100)).await.unwrap();
        handler.handle(cmd(id, "12345", 200)).await.unwrap();

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.point.value(), 300);
    }
}
