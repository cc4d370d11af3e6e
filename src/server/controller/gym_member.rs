use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, RespondDto},
        gym::GymProfileDto,
        request::{CreateJoinRequestDto, JoinRequestDto, JoinRequestResponseDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            gym::GymDirectoryEntry,
            request::{JoinRequestWithUser, RequestAction},
        },
        service::{gym::GymService, join_request::JoinRequestService},
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping gym directory and join request endpoints in OpenAPI documentation
pub static GYM_MEMBER_TAG: &str = "gym-members";

const STAFF: &[Role] = &[Role::Gym, Role::Trainer];

/// Public directory of gyms.
///
/// Lists every gym with its owner, trainers, photos and plan catalog. For a
/// calling `Member`, each entry also reports whether the caller has a
/// pending join request for that gym.
///
/// # Access Control
/// - Any authenticated account
#[utoipa::path(
    get,
    path = "/api/gym-members",
    tag = GYM_MEMBER_TAG,
    responses(
        (status = 200, description = "Gym directory", body = Vec<GymProfileDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_gym_directory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let entries = GymService::new(&state.db).directory(&user).await?;

    Ok((
        StatusCode::OK,
        Json(
            entries
                .into_iter()
                .map(GymDirectoryEntry::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Ask to join a gym.
///
/// # Access Control
/// - `Member` - Not yet on any gym roster
///
/// # Returns
/// - `201 Created` - Pending join request
/// - `400 Bad Request` - Missing gym id, caller already on a roster, or a
///   pending request for the gym already exists
/// - `404 Not Found` - No such gym
#[utoipa::path(
    post,
    path = "/api/gym-members/join",
    tag = GYM_MEMBER_TAG,
    request_body = CreateJoinRequestDto,
    responses(
        (status = 201, description = "Join request submitted", body = JoinRequestResponseDto),
        (status = 400, description = "Invalid or duplicate join request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member account", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn join_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateJoinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Member])
        .await?;

    let request = JoinRequestService::new(&state.db)
        .join(&user, payload.gym_id, payload.contact_number)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinRequestResponseDto {
            message: "Join request submitted successfully".to_string(),
            request: request.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/gym-members/requests",
    tag = GYM_MEMBER_TAG,
    responses(
        (status = 200, description = "Pending join requests", body = Vec<JoinRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_join_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let requests = JoinRequestService::new(&state.db).pending(&staff).await?;

    Ok((
        StatusCode::OK,
        Json(
            requests
                .into_iter()
                .map(JoinRequestWithUser::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Accept or reject a pending join request.
///
/// Accepting adds the applicant to the gym's member roster.
///
/// # Access Control
/// - `Gym` - Owner of the gym
/// - `Trainer` - Trainer of the gym
#[utoipa::path(
    post,
    path = "/api/gym-members/respond",
    tag = GYM_MEMBER_TAG,
    request_body = RespondDto,
    responses(
        (status = 200, description = "Join request settled", body = JoinRequestResponseDto),
        (status = 400, description = "Invalid action or request already processed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 404, description = "Join request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn respond_join_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<RespondDto>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let action = RequestAction::parse(&payload.action)?;
    let settled = JoinRequestService::new(&state.db)
        .respond(&staff, payload.request_id, action)
        .await?;

    Ok((
        StatusCode::OK,
        Json(JoinRequestResponseDto {
            message: format!("Join request {}", settled.request.status),
            request: settled.into_dto(),
        }),
    ))
}
