use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto},
        member::{CreateMemberDto, MemberDto, MemberResponseDto, UpdateMemberDto},
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::member::MemberWithUser,
        service::member::MemberService, state::AppState, util::extract::{JsonBody, PathParam},
    },
};

/// Tag for grouping member roster endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "members";

/// Staff roles allowed to manage a gym's member roster.
const STAFF: &[Role] = &[Role::Gym, Role::Trainer];

/// Add an existing Member account to the caller's gym.
///
/// # Access Control
/// - `Gym` - Owner of the gym
/// - `Trainer` - Trainer of the gym
///
/// # Returns
/// - `201 Created` - Member added
/// - `400 Bad Request` - Missing fields, no such Member account, or already on
///   a roster
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member added", body = MemberResponseDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let member = MemberService::new(&state.db)
        .add(&staff, &payload.member_email, payload.contact_number)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MemberResponseDto {
            message: "Member added successfully".to_string(),
            member: member.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Members of the caller's gym", body = Vec<MemberDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_members(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let members = MemberService::new(&state.db).list(&staff).await?;

    Ok((
        StatusCode::OK,
        Json(
            members
                .into_iter()
                .map(MemberWithUser::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member updated", body = MemberResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 404, description = "Member not found in your gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    let member = MemberService::new(&state.db)
        .update(&staff, id, payload.contact_number)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MemberResponseDto {
            message: "Member updated successfully".to_string(),
            member: member.into_dto(),
        }),
    ))
}

/// Remove a member from the caller's gym.
///
/// The member's plans, plan requests, renewal requests and membership are
/// removed with it. Messages are kept.
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member removed", body = MessageResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not gym staff", body = ErrorDto),
        (status = 404, description = "Member not found in your gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(STAFF)
        .await?;

    MemberService::new(&state.db).remove(&staff, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Member removed successfully")),
    ))
}
