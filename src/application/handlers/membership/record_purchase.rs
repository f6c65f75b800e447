//! RecordPurchaseHandler - Command handler for purchase-driven accrual.
//!
//! Converts a purchase price into points via the configured `PointPolicy`,
//! then runs the same lookup/ownership/add sequence as direct accumulation.

use std::sync::Arc;

use crate::domain::foundation::{MembershipId, Point, UserId};
use crate::domain::membership::MembershipError;
use crate::domain::point::PointPolicy;
use crate::ports::MembershipStore;

/// Command to accrue points for a purchase.
///
/// `price` is validated non-negative at the boundary.
#[derive(Debug, Clone)]
pub struct RecordPurchaseCommand {
    pub id: MembershipId,
    pub user_id: UserId,
    pub price: i64,
}

/// Handler that derives earned points from a purchase price.
pub struct RecordPurchaseHandler {
    store: Arc<dyn MembershipStore>,
    policy: Arc<dyn PointPolicy>,
}

impl RecordPurchaseHandler {
    pub fn new(store: Arc<dyn MembershipStore>, policy: Arc<dyn PointPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, cmd: RecordPurchaseCommand) -> Result<(), MembershipError> {
        let earned = Point::try_new(self.policy.calculate_amount(cmd.price))
            .map_err(|e| MembershipError::validation("price", e.to_string()))?;

        let mut membership = self
            .store
            .find_by_id(&cmd.id)
            .await?
            .ok_or(MembershipError::NotFound(cmd.id))?;

        if !membership.is_owned_by(&cmd.user_id) {
            return Err(MembershipError::not_owner(cmd.id, cmd.user_id));
        }

        membership.accumulate(earned);
        self.store.update(&membership).await?;

        Ok(())
    }
}
