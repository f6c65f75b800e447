//! Axum router configuration for membership endpoints.
//!
//! This module defines the route structure for membership-related API endpoints
//! and wires them to their corresponding handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    accumulate_point, get_membership_detail, list_memberships, record_purchase,
    register_membership, remove_membership, MembershipAppState,
};

/// Create the membership API router.
///
/// # Routes
///
/// All routes identify the caller through the `X-USER-ID` header.
///
/// - `POST /` - Register a membership with a provider
/// - `GET /` - List the caller's memberships
/// - `GET /:id` - Get one membership the caller owns
/// - `POST /:id/accumulate` - Add points directly
/// - `POST /:id/purchases` - Accrue points for a purchase
/// - `DELETE /:id` - Remove a membership
pub fn membership_routes() -> Router<MembershipAppState> {
    Router::new()
        .route("/", post(register_membership).get(list_memberships))
        .route(
            "/:id",
            get(get_membership_detail).delete(remove_membership),
        )
        .route("/:id/accumulate", post(accumulate_point))
        .route("/:id/purchases", post(record_purchase))
}

/// Create the complete membership module router, mounted at
/// `/api/v1/memberships`.
pub fn membership_router() -> Router<MembershipAppState> {
    Router::new().nest("/api/v1/memberships", membership_routes())
}
