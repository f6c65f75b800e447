//! HTTP DTOs (Data Transfer Objects) for membership endpoints.
//!
//! These types define the JSON request/response structure for the membership API.
//! They serve as the boundary between HTTP and the application layer.

use crate::application::handlers::membership::{MembershipDetail, RegisterMembershipResult};
use crate::domain::membership::MembershipType;
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to register a new membership.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterMembershipRequest {
    /// The loyalty provider to register with.
    pub membership_type: MembershipType,
    /// Initial point balance. Must be non-negative.
    pub point: i64,
}

/// Request to add points directly to a membership.
#[derive(Debug, Clone, Deserialize)]
pub struct AccumulatePointRequest {
    /// Points to add. Must be non-negative.
    pub point: i64,
}

/// Request to accrue points for a purchase.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPurchaseRequest {
    /// Purchase price the accrual is derived from. Must be non-negative.
    pub price: i64,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a successful registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterMembershipResponse {
    /// Identifier of the newly created membership.
    pub id: String,
    /// The provider the membership was registered with.
    pub membership_type: MembershipType,
}

impl From<RegisterMembershipResult> for RegisterMembershipResponse {
    fn from(result: RegisterMembershipResult) -> Self {
        Self {
            id: result.id.to_string(),
            membership_type: result.membership_type,
        }
    }
}

/// Detailed membership view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipDetailResponse {
    /// Membership ID.
    pub id: String,
    /// The loyalty provider.
    pub membership_type: MembershipType,
    /// Current point balance.
    pub point: i64,
    /// When the membership was registered (ISO 8601).
    pub created_at: String,
}

impl From<MembershipDetail> for MembershipDetailResponse {
    fn from(detail: MembershipDetail) -> Self {
        Self {
            id: detail.id.to_string(),
            membership_type: detail.membership_type,
            point: detail.point.value(),
            created_at: detail.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response listing all of a user's memberships.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipListResponse {
    pub memberships: Vec<MembershipDetailResponse>,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error_code: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
