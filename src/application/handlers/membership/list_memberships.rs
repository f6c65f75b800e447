//! ListMembershipsHandler - Query handler for a user's enrollments.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::membership::MembershipError;
use crate::ports::MembershipStore;

use super::MembershipDetail;

/// Query for all memberships owned by a user.
#[derive(Debug, Clone)]
pub struct ListMembershipsQuery {
    pub user_id: UserId,
}

/// Handler for listing a user's memberships. An empty list is success.
pub struct ListMembershipsHandler {
    store: Arc<dyn MembershipStore>,
}

impl ListMembershipsHandler {
    pub fn new(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListMembershipsQuery,
    ) -> Result<Vec<MembershipDetail>, MembershipError> {
        let memberships = self.store.find_all_by_user(&query.user_id).await?;
        Ok(memberships.into_iter().map(MembershipDetail::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::membership::test_support::InMemoryMembershipStore;
    use crate::domain::foundation::Point;
    use crate::domain::membership::{MembershipType, NewMembership};

    fn test_user_id() -> UserId {
        UserId::new("12345").unwrap()
    }

    #[tokio::test]
    async fn returns_empty_list_for_unknown_user() {
        let store = Arc::new(InMemoryMembershipStore::new());
        let handler = ListMembershipsHandler::new(store);

        let details = handler
            .handle(ListMembershipsQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn returns_exactly_the_users_memberships() {
        let store = Arc::new(InMemoryMembershipStore::new());
        for membership_type in [MembershipType::Naver, MembershipType::Line] {
            store
                .insert(NewMembership::new(
                    test_user_id(),
                    membership_type,
                    Point::ZERO,
                ))
                .await
                .unwrap();
        }
        // Another user's enrollment must not leak into the list
        store
            .insert(NewMembership::new(
                UserId::new("99999").unwrap(),
                MembershipType::Kakao,
                Point::ZERO,
            ))
            .await
            .unwrap();

        let handler = ListMembershipsHandler::new(store);
        let details = handler
            .handle(ListMembershipsQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert_eq!(details.len(), 2);
        assert!(details
            .iter()
            .all(|d| d.membership_type != MembershipType::Kakao));
    }
}
