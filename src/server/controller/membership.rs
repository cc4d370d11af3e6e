use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto, RespondDto},
        membership::{
            CreateMembershipDto, MembershipDto, MembershipResponseDto, UpdateMembershipDto,
        },
        request::{RenewalRequestDto, RenewalRequestResponseDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            membership::{CreateMembershipParams, MembershipWithMember, UpdateMembershipParams},
            request::{RenewalRequestWithMember, RequestAction},
        },
        service::membership::MembershipService,
        state::AppState,
        util::extract::{JsonBody, PathParam},
    },
};

/// Tag for grouping membership endpoints in OpenAPI documentation
pub static MEMBERSHIP_TAG: &str = "membership";

const STAFF: &[Role] = &[Role::Gym, Role::Trainer];

/// Create a membership for a member of the caller's gym.
///
/// Dates accept RFC 3339 timestamps or plain `YYYY-MM-DD` dates. A member
/// holds at most one membership.
///
/// # Access Control
/// - `Gym` - Owner of the gym
/// - `Trainer` - Trainer of the gym
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Member id, join date and expiry date
///
/// # Returns
/// - `201 Created` - Membership created
/// - `400 Bad Request` - Missing or malformed dates, expiry not after join,
///   member outside the gym, or member already holds a membership
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not staff of a gym
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/memberships",
    tag = MEMBERSHIP_TAG,
    request_body = CreateMembershipDto,
    responses(
        (status = 201, description = "Membership created", body = MembershipResponseDto),
        (status = 400, description = "Invalid membership data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_membership(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateMembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let params = CreateMembershipParams::from_dto(payload)?;
    let membership = MembershipService::new(&state.db)
        .create(&staff, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MembershipResponseDto {
            message: "Membership added successfully".to_string(),
            membership: membership.into_dto(),
        }),
    ))
}

/// List memberships of the caller's gym, soonest expiry first.
#[utoipa::path(
    get,
    path = "/api/memberships",
    tag = MEMBERSHIP_TAG,
    responses(
        (status = 200, description = "Memberships of the caller's gym", body = Vec<MembershipDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_memberships(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let memberships = MembershipService::new(&state.db).list(&staff).await?;

    Ok((
        StatusCode::OK,
        Json(
            memberships
                .into_iter()
                .map(MembershipWithMember::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    put,
    path = "/api/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Membership ID")
    ),
    request_body = UpdateMembershipDto,
    responses(
        (status = 200, description = "Membership updated", body = MembershipResponseDto),
        (status = 400, description = "Malformed or unordered dates", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 404, description = "Membership not found in your gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_membership(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateMembershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let params = UpdateMembershipParams::from_dto(payload)?;
    let membership = MembershipService::new(&state.db)
        .update(&staff, id, params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MembershipResponseDto {
            message: "Membership updated successfully".to_string(),
            membership: membership.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 200, description = "Membership deleted", body = MessageResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 404, description = "Membership not found in your gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_membership(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    MembershipService::new(&state.db).delete(&staff, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Membership deleted successfully")),
    ))
}

/// List pending renewal requests of the caller's gym.
#[utoipa::path(
    get,
    path = "/api/memberships/renewals",
    tag = MEMBERSHIP_TAG,
    responses(
        (status = 200, description = "Pending renewal requests", body = Vec<RenewalRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_renewal_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let requests = MembershipService::new(&state.db)
        .pending_renewals(&staff)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            requests
                .into_iter()
                .map(RenewalRequestWithMember::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Accept or reject a pending renewal request.
///
/// Accepting extends the membership by 30 days from its current expiry.
/// A request can be answered once.
#[utoipa::path(
    post,
    path = "/api/memberships/renewals/respond",
    tag = MEMBERSHIP_TAG,
    request_body = RespondDto,
    responses(
        (status = 200, description = "Renewal request settled", body = RenewalRequestResponseDto),
        (status = 400, description = "Invalid action or request already processed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 404, description = "Renewal request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn respond_renewal_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<RespondDto>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let action = RequestAction::parse(&payload.action)?;
    let settled = MembershipService::new(&state.db)
        .respond_renewal(&staff, payload.request_id, action)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RenewalRequestResponseDto {
            message: format!("Renewal request {}", settled.request.status),
            request: settled.into_dto(),
        }),
    ))
}
