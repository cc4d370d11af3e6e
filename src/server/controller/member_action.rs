use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        gym::GymProfileDto,
        membership::MembershipDto,
        plan::PlanDto,
        request::{
            CreatePlanRequestDto, PlanRequestResponseDto, RenewalRequestResponseDto,
        },
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::plan::Plan,
        service::member_action::MemberActionService, state::AppState, util::extract::JsonBody,
    },
};

/// Tag for grouping member self-service endpoints in OpenAPI documentation
pub static MEMBER_ACTION_TAG: &str = "member";

/// Profile of the calling member's gym.
///
/// # Access Control
/// - `Member` - On a gym roster
#[utoipa::path(
    get,
    path = "/api/member/gym-profile",
    tag = MEMBER_ACTION_TAG,
    responses(
        (status = 200, description = "Gym profile", body = GymProfileDto),
        (status = 400, description = "Caller is not on a gym roster", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_gym_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Member])
        .await?;

    let gym = MemberActionService::new(&state.db).gym_profile(&user).await?;

    Ok((StatusCode::OK, Json(gym.into_profile_dto(None))))
}

/// Profile of the calling trainer's gym.
///
/// # Access Control
/// - `Trainer` - On a gym roster
#[utoipa::path(
    get,
    path = "/api/member/trainer-gym",
    tag = MEMBER_ACTION_TAG,
    responses(
        (status = 200, description = "Gym profile", body = GymProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a trainer on a gym roster", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_trainer_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Trainer])
        .await?;

    let gym = MemberActionService::new(&state.db).trainer_gym(&user).await?;

    Ok((StatusCode::OK, Json(gym.into_profile_dto(None))))
}

/// Ask the gym's trainers for a workout or diet plan.
///
/// # Access Control
/// - `Member` - On a gym roster
///
/// # Arguments
/// - `payload` - Plan type (`Workout` or `Diet`) and week number
///
/// # Returns
/// - `201 Created` - Pending plan request
/// - `400 Bad Request` - Invalid type or week, no trainers in the gym, or
///   the plan already exists or was already requested
#[utoipa::path(
    post,
    path = "/api/member/request-plan",
    tag = MEMBER_ACTION_TAG,
    request_body = CreatePlanRequestDto,
    responses(
        (status = 201, description = "Plan request submitted", body = PlanRequestResponseDto),
        (status = 400, description = "Invalid or duplicate plan request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn request_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreatePlanRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Member])
        .await?;

    let request = MemberActionService::new(&state.db)
        .request_plan(&user, &payload.plan_type, payload.week)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PlanRequestResponseDto {
            message: "Plan request submitted successfully".to_string(),
            request: request.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/member/plans",
    tag = MEMBER_ACTION_TAG,
    responses(
        (status = 200, description = "Plans written for the caller", body = Vec<PlanDto>),
        (status = 400, description = "Caller is not on a gym roster", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_my_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Member])
        .await?;

    let plans = MemberActionService::new(&state.db).plans(&user).await?;

    Ok((
        StatusCode::OK,
        Json(plans.into_iter().map(Plan::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/member/membership",
    tag = MEMBER_ACTION_TAG,
    responses(
        (status = 200, description = "The caller's membership", body = MembershipDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member account", body = ErrorDto),
        (status = 404, description = "No membership found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_my_membership(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Member])
        .await?;

    let membership = MemberActionService::new(&state.db)
        .membership(&user)
        .await?;

    Ok((StatusCode::OK, Json(membership.into_dto())))
}

/// Ask the gym to extend the caller's membership.
///
/// # Returns
/// - `201 Created` - Pending renewal request
/// - `400 Bad Request` - A renewal is already pending
/// - `404 Not Found` - The caller holds no membership
#[utoipa::path(
    post,
    path = "/api/member/renewal-request",
    tag = MEMBER_ACTION_TAG,
    responses(
        (status = 201, description = "Renewal request submitted", body = RenewalRequestResponseDto),
        (status = 400, description = "Renewal already pending", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member account", body = ErrorDto),
        (status = 404, description = "No membership found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn request_renewal(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Member])
        .await?;

    let request = MemberActionService::new(&state.db)
        .request_renewal(&user)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RenewalRequestResponseDto {
            message: "Renewal request submitted successfully".to_string(),
            request: request.into_dto(),
        }),
    ))
}
