//! RemoveMembershipHandler - Command handler for hard removal.

use std::sync::Arc;

use crate::domain::foundation::{MembershipId, UserId};
use crate::domain::membership::MembershipError;
use crate::ports::MembershipStore;

/// Command to remove a membership.
#[derive(Debug, Clone)]
pub struct RemoveMembershipCommand {
    pub id: MembershipId,
    pub user_id: UserId,
}

/// Handler for removing an owned membership. Hard delete, no soft-delete
/// or versioning.
pub struct RemoveMembershipHandler {
    store: Arc<dyn MembershipStore>,
}

impl RemoveMembershipHandler {
    pub fn new(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RemoveMembershipCommand) -> Result<(), MembershipError> {
        let membership = self
            .store
            .find_by_id(&cmd.id)
            .await?
            .ok_or(MembershipError::NotFound(cmd.id))?;

        if !membership.is_owned_by(&cmd.user_id) {
            return Err(MembershipError::not_owner(cmd.id, cmd.user_id));
        }

        self.store.delete_by_id(&cmd.id).await?;

        Ok(())
    }
}
