use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto},
        plan::{CreatePlanDto, PlanDto, PlanResponseDto, UpdatePlanDto},
        request::{FulfillPlanRequestDto, PlanRequestDto, PlanRequestResponseDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            plan::{NewPlanInput, PlanWithMember},
            request::PlanRequestWithMember,
        },
        service::plan::PlanService,
        state::AppState,
        util::extract::{JsonBody, PathParam},
    },
};

/// Tag for grouping plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "plan";

/// Write a plan for a member of the trainer's gym.
///
/// # Access Control
/// - `Trainer`
///
/// # Returns
/// - `201 Created` - Plan created
/// - `400 Bad Request` - Missing fields, unknown type, week below 1, member
///   outside the gym, or a plan of that type already exists for the week
/// - `403 Forbidden` - Caller is not a trainer on a roster
#[utoipa::path(
    post,
    path = "/api/plans",
    tag = PLAN_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Plan created", body = PlanResponseDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a trainer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let trainer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Trainer])
        .await?;

    let input = NewPlanInput::from_dto(payload)?;
    let plan = PlanService::new(&state.db).create(&trainer, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(PlanResponseDto {
            message: "Plan created successfully".to_string(),
            plan: plan.into_dto(),
        }),
    ))
}

/// List plans written by the calling trainer.
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Plans written by the caller", body = Vec<PlanDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a trainer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let trainer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Trainer])
        .await?;

    let plans = PlanService::new(&state.db).list(&trainer).await?;

    Ok((
        StatusCode::OK,
        Json(
            plans
                .into_iter()
                .map(PlanWithMember::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    put,
    path = "/api/plans/{id}",
    tag = PLAN_TAG,
    params(
        ("id" = i32, Path, description = "Plan ID")
    ),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Plan updated", body = PlanResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a trainer", body = ErrorDto),
        (status = 404, description = "Plan not found or not yours", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let trainer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Trainer])
        .await?;

    let plan = PlanService::new(&state.db)
        .update(&trainer, id, payload.content)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlanResponseDto {
            message: "Plan updated successfully".to_string(),
            plan: plan.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/plans/{id}",
    tag = PLAN_TAG,
    params(
        ("id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 200, description = "Plan deleted", body = MessageResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a trainer", body = ErrorDto),
        (status = 404, description = "Plan not found or not yours", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let trainer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Trainer])
        .await?;

    PlanService::new(&state.db).delete(&trainer, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Plan deleted successfully")),
    ))
}

/// List pending plan requests of the trainer's gym.
#[utoipa::path(
    get,
    path = "/api/plans/requests",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Pending plan requests", body = Vec<PlanRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a trainer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_plan_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let trainer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Trainer])
        .await?;

    let requests = PlanService::new(&state.db)
        .pending_requests(&trainer)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            requests
                .into_iter()
                .map(PlanRequestWithMember::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Answer a pending plan request with a new plan.
///
/// The plan is authored by the calling trainer and linked to the request,
/// which becomes `fulfilled`.
#[utoipa::path(
    post,
    path = "/api/plans/requests/{id}/fulfill",
    tag = PLAN_TAG,
    params(
        ("id" = i32, Path, description = "Plan request ID")
    ),
    request_body = FulfillPlanRequestDto,
    responses(
        (status = 200, description = "Plan request fulfilled", body = PlanRequestResponseDto),
        (status = 400, description = "Blank content, request already processed or plan exists", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a trainer", body = ErrorDto),
        (status = 404, description = "Plan request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn fulfill_plan_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<FulfillPlanRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let trainer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Trainer])
        .await?;

    let fulfilled = PlanService::new(&state.db)
        .fulfill_request(&trainer, id, payload.content)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlanRequestResponseDto {
            message: "Plan request fulfilled successfully".to_string(),
            request: fulfilled.into_dto(),
        }),
    ))
}
