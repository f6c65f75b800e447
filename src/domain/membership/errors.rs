//! Membership-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Duplicate | 409 |
//! | NotFound | 404 |
//! | NotOwner | 403 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, MembershipId, UserId};

use super::MembershipType;

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// Registration attempted for a (user, provider) pair that already
    /// has an active membership.
    Duplicate {
        user_id: UserId,
        membership_type: MembershipType,
    },

    /// Membership was not found.
    NotFound(MembershipId),

    /// Caller does not own the membership being mutated or read.
    NotOwner {
        id: MembershipId,
        user_id: UserId,
    },

    /// Validation failed.
    ValidationFailed {
        field: String,
        message: String,
    },

    /// Infrastructure error.
    Infrastructure(String),
}

impl MembershipError {
    pub fn duplicate(user_id: UserId, membership_type: MembershipType) -> Self {
        MembershipError::Duplicate {
            user_id,
            membership_type,
        }
    }

    pub fn not_found(id: MembershipId) -> Self {
        MembershipError::NotFound(id)
    }

    pub fn not_owner(id: MembershipId, user_id: UserId) -> Self {
        MembershipError::NotOwner { id, user_id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::Duplicate { .. } => ErrorCode::DuplicateMembership,
            MembershipError::NotFound(_) => ErrorCode::MembershipNotFound,
            MembershipError::NotOwner { .. } => ErrorCode::NotOwner,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::Duplicate {
                user_id,
                membership_type,
            } => format!(
                "User {} already has a {} membership",
                user_id, membership_type
            ),
            MembershipError::NotFound(id) => format!("Membership not found: {}", id),
            MembershipError::NotOwner { id, user_id } => {
                format!("User {} does not own membership {}", user_id, id)
            }
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::Negative
            | ErrorCode::InvalidFormat => MembershipError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("12345").unwrap()
    }

    #[test]
    fn duplicate_carries_user_and_type() {
        let err = MembershipError::duplicate(test_user_id(), MembershipType::Naver);
        assert_eq!(err.code(), ErrorCode::DuplicateMembership);
        assert!(err.message().contains("12345"));
        assert!(err.message().contains("NAVER"));
    }

    #[test]
    fn not_found_message_includes_id() {
        let id = MembershipId::new();
        let err = MembershipError::not_found(id);
        assert_eq!(err.code(), ErrorCode::MembershipNotFound);
        assert!(err.message().contains(&id.to_string()));
    }

    #[test]
    fn not_owner_message_includes_both_ids() {
        let id = MembershipId::new();
        let err = MembershipError::not_owner(id, test_user_id());
        assert_eq!(err.code(), ErrorCode::NotOwner);
        let msg = err.message();
        assert!(msg.contains("12345"));
        assert!(msg.contains(&id.to_string()));
    }

    #[test]
    fn display_matches_message() {
        let err = MembershipError::validation("point", "must not be negative");
        assert_eq!(format!("{}", err), err.message());
    }

    #[test]
    fn converts_to_domain_error() {
        let err = MembershipError::not_found(MembershipId::new());
        let domain_err: DomainError = err.clone().into();
        assert_eq!(domain_err.code, err.code());
    }

    #[test]
    fn infrastructure_domain_error_converts_back() {
        let domain_err = DomainError::new(ErrorCode::DatabaseError, "connection lost");
        let err: MembershipError = domain_err.into();
        assert!(matches!(err, MembershipError::Infrastructure(_)));
    }

    #[test]
    fn validation_domain_error_keeps_field_detail() {
        let domain_err = DomainError::validation("point", "must not be negative");
        let err: MembershipError = domain_err.into();
        assert!(matches!(
            err,
            MembershipError::ValidationFailed { ref field, .. } if field == "point"
        ));
    }
}
