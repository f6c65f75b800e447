//! HTTP adapter for membership endpoints.
//!
//! Exposes the membership domain via REST API:
//! - `POST /api/v1/memberships` - Register a membership
//! - `GET /api/v1/memberships` - List the caller's memberships
//! - `GET /api/v1/memberships/:id` - Get one membership the caller owns
//! - `POST /api/v1/memberships/:id/accumulate` - Add points directly
//! - `POST /api/v1/memberships/:id/purchases` - Accrue points for a purchase
//! - `DELETE /api/v1/memberships/:id` - Remove a membership

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{MembershipApiError, MembershipAppState, RequestUser, USER_ID_HEADER};
pub use routes::{membership_router, membership_routes};
