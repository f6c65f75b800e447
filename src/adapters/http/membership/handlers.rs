//! HTTP handlers for membership endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::handlers::membership::{
    AccumulatePointCommand, AccumulatePointHandler, GetMembershipDetailHandler,
    GetMembershipDetailQuery, ListMembershipsHandler, ListMembershipsQuery,
    RecordPurchaseCommand, RecordPurchaseHandler, RegisterMembershipCommand,
    RegisterMembershipHandler, RemoveMembershipCommand, RemoveMembershipHandler,
};
use crate::domain::foundation::{MembershipId, Point, UserId};
use crate::domain::membership::MembershipError;
use crate::domain::point::PointPolicy;
use crate::ports::MembershipStore;

use super::dto::{
    AccumulatePointRequest, ErrorResponse, MembershipDetailResponse, MembershipListResponse,
    RecordPurchaseRequest, RegisterMembershipRequest, RegisterMembershipResponse,
};

/// Identity header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "X-USER-ID";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct MembershipAppState {
    pub membership_store: Arc<dyn MembershipStore>,
    pub point_policy: Arc<dyn PointPolicy>,
}

impl MembershipAppState {
    /// Create handlers on demand from the shared state.
    pub fn register_handler(&self) -> RegisterMembershipHandler {
        RegisterMembershipHandler::new(self.membership_store.clone())
    }

    pub fn detail_handler(&self) -> GetMembershipDetailHandler {
        GetMembershipDetailHandler::new(self.membership_store.clone())
    }

    pub fn list_handler(&self) -> ListMembershipsHandler {
        ListMembershipsHandler::new(self.membership_store.clone())
    }

    pub fn accumulate_handler(&self) -> AccumulatePointHandler {
        AccumulatePointHandler::new(self.membership_store.clone())
    }

    pub fn purchase_handler(&self) -> RecordPurchaseHandler {
        RecordPurchaseHandler::new(self.membership_store.clone(), self.point_policy.clone())
    }

    pub fn remove_handler(&self) -> RemoveMembershipHandler {
        RemoveMembershipHandler::new(self.membership_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context
// ════════════════════════════════════════════════════════════════════════════════

/// Caller identity extracted from the `X-USER-ID` request header.
///
/// A missing or empty header is rejected before the handler runs.
#[derive(Debug, Clone)]
pub struct RequestUser {
    pub user_id: UserId,
}

/// Rejection type for RequestUser extraction.
#[derive(Debug)]
pub struct UserIdRequired;

impl IntoResponse for UserIdRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new(
            "USER_ID_REQUIRED",
            "A non-empty X-USER-ID header is required",
        );
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequestUser
where
    S: Send + Sync,
{
    type Rejection = UserIdRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get(USER_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| UserId::new(s).ok())
                .ok_or(UserIdRequired)?;

            Ok(RequestUser { user_id })
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/memberships - List the caller's memberships
pub async fn list_memberships(
    State(state): State<MembershipAppState>,
    user: RequestUser,
) -> Result<impl IntoResponse, MembershipApiError> {
    let handler = state.list_handler();
    let query = ListMembershipsQuery {
        user_id: user.user_id,
    };

    let result = handler.handle(query).await?;

    let response = MembershipListResponse {
        memberships: result.into_iter().map(MembershipDetailResponse::from).collect(),
    };

    Ok(Json(response))
}

/// GET /api/v1/memberships/:id - Get one membership the caller owns
pub async fn get_membership_detail(
    State(state): State<MembershipAppState>,
    user: RequestUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let handler = state.detail_handler();
    let query = GetMembershipDetailQuery {
        id: MembershipId::from_uuid(id),
        user_id: user.user_id,
    };

    let result = handler.handle(query).await?;

    Ok(Json(MembershipDetailResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/memberships - Register a new membership
pub async fn register_membership(
    State(state): State<MembershipAppState>,
    user: RequestUser,
    Json(request): Json<RegisterMembershipRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let point = Point::try_new(request.point)
        .map_err(|e| MembershipError::validation("point", e.to_string()))?;

    let handler = state.register_handler();
    let cmd = RegisterMembershipCommand {
        user_id: user.user_id,
        membership_type: request.membership_type,
        point,
    };

    let result = handler.handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterMembershipResponse::from(result)),
    ))
}

/// POST /api/v1/memberships/:id/accumulate - Add points directly
pub async fn accumulate_point(
    State(state): State<MembershipAppState>,
    user: RequestUser,
    Path(id): Path<Uuid>,
    Json(request): Json<AccumulatePointRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let point = Point::try_new(request.point)
        .map_err(|e| MembershipError::validation("point", e.to_string()))?;

    let handler = state.accumulate_handler();
    let cmd = AccumulatePointCommand {
        id: MembershipId::from_uuid(id),
        user_id: user.user_id,
        point,
    };

    handler.handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/memberships/:id/purchases - Accrue points for a purchase
pub async fn record_purchase(
    State(state): State<MembershipAppState>,
    user: RequestUser,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordPurchaseRequest>,
) -> Result<impl IntoResponse, MembershipApiError> {
    if request.price < 0 {
        return Err(MembershipApiError::from(MembershipError::validation(
            "price",
            "price must be non-negative",
        )));
    }

    let handler = state.purchase_handler();
    let cmd = RecordPurchaseCommand {
        id: MembershipId::from_uuid(id),
        user_id: user.user_id,
        price: request.price,
    };

    handler.handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/memberships/:id - Remove a membership
pub async fn remove_membership(
    State(state): State<MembershipAppState>,
    user: RequestUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let handler = state.remove_handler();
    let cmd = RemoveMembershipCommand {
        id: MembershipId::from_uuid(id),
        user_id: user.user_id,
    };

    handler.handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
pub struct MembershipApiError(MembershipError);

impl From<MembershipError> for MembershipApiError {
    fn from(err: MembershipError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::DomainError> for MembershipApiError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        Self(MembershipError::from(err))
    }
}

impl IntoResponse for MembershipApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            MembershipError::Duplicate { .. } => (StatusCode::CONFLICT, "DUPLICATE_MEMBERSHIP"),
            MembershipError::NotFound(_) => (StatusCode::NOT_FOUND, "MEMBERSHIP_NOT_FOUND"),
            MembershipError::NotOwner { .. } => (StatusCode::FORBIDDEN, "NOT_OWNER"),
            MembershipError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            MembershipError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let message = self.0.message();
        let body = ErrorResponse::new(error_code, message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MembershipId;

    fn status_of(err: MembershipError) -> StatusCode {
        MembershipApiError::from(err).into_response().status()
    }

    #[test]
    fn duplicate_maps_to_conflict() {
        let err = MembershipError::duplicate(
            UserId::new("12345").unwrap(),
            crate::domain::membership::MembershipType::Naver,
        );
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = MembershipError::not_found(MembershipId::new());
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_owner_maps_to_forbidden() {
        let err = MembershipError::not_owner(MembershipId::new(), UserId::new("99999").unwrap());
        assert_eq!(status_of(err), StatusCode::FORBIDDEN);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = MembershipError::validation("point", "must be non-negative");
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_internal_error() {
        let err = MembershipError::infrastructure("connection refused");
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_user_id_rejection_is_unauthorized() {
        let response = UserIdRequired.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // RequestUser Extractor Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn request_user_extracts_header_value() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder()
            .uri("/api/v1/memberships")
            .header(USER_ID_HEADER, "12345")
            .body(())
            .unwrap();

        let (mut parts, _body) = request.into_parts();

        let result: Result<RequestUser, UserIdRequired> =
            RequestUser::from_request_parts(&mut parts, &()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().user_id, UserId::new("12345").unwrap());
    }

    #[tokio::test]
    async fn request_user_fails_without_header() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder()
            .uri("/api/v1/memberships")
            .body(())
            .unwrap();

        let (mut parts, _body) = request.into_parts();

        let result: Result<RequestUser, UserIdRequired> =
            RequestUser::from_request_parts(&mut parts, &()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn request_user_fails_on_empty_header() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder()
            .uri("/api/v1/memberships")
            .header(USER_ID_HEADER, "")
            .body(())
            .unwrap();

        let (mut parts, _body) = request.into_parts();

        let result: Result<RequestUser, UserIdRequired> =
            RequestUser::from_request_parts(&mut parts, &()).await;

        assert!(result.is_err());
    }
}
