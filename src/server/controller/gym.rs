use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto},
        gym::{CreateGymDto, GymDto, GymResponseDto, UpdateGymDto},
        user::Role,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::gym::{GymDetail, NewGymInput, UpdateGymParams},
        service::gym::GymService,
        state::AppState,
        util::extract::{JsonBody, PathParam},
    },
};

/// Tag for grouping gym endpoints in OpenAPI documentation
pub static GYM_TAG: &str = "gym";

fn gym_response(message: &str, detail: GymDetail) -> GymResponseDto {
    GymResponseDto {
        message: message.to_string(),
        gym: detail.into_dto(),
    }
}

/// Create a gym for an existing Gym account.
///
/// The platform owner registers a gym on behalf of the account named by
/// `ownerEmail`. That account must have the Gym role and own no gym yet.
///
/// # Access Control
/// - `Owner` - Only the platform owner can register gyms for others
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Gym details, owner details and owner email
///
/// # Returns
/// - `201 Created` - Gym created
/// - `400 Bad Request` - Missing fields or invalid owner account
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not the platform owner
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/gyms",
    tag = GYM_TAG,
    request_body = CreateGymDto,
    responses(
        (status = 201, description = "Gym created", body = GymResponseDto),
        (status = 400, description = "Invalid gym data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the platform owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateGymDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    let detail = GymService::new(&state.db)
        .create(NewGymInput::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(gym_response("Gym created successfully", detail)),
    ))
}

/// List every gym.
///
/// # Access Control
/// - `Owner`
#[utoipa::path(
    get,
    path = "/api/gyms",
    tag = GYM_TAG,
    responses(
        (status = 200, description = "All gyms", body = Vec<GymDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the platform owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_gyms(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    let gyms = GymService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(gyms.into_iter().map(GymDetail::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get one gym by id.
///
/// # Access Control
/// - `Owner`
#[utoipa::path(
    get,
    path = "/api/gyms/{id}",
    tag = GYM_TAG,
    params(
        ("id" = i32, Path, description = "Gym ID")
    ),
    responses(
        (status = 200, description = "The gym", body = GymDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the platform owner", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    let detail = GymService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Update a gym by id.
///
/// Absent or blank fields keep their stored values; a supplied photo or
/// membership plan list replaces the stored list.
///
/// # Access Control
/// - `Owner`
#[utoipa::path(
    put,
    path = "/api/gyms/{id}",
    tag = GYM_TAG,
    params(
        ("id" = i32, Path, description = "Gym ID")
    ),
    request_body = UpdateGymDto,
    responses(
        (status = 200, description = "Gym updated", body = GymResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the platform owner", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateGymDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    let detail = GymService::new(&state.db)
        .update(id, UpdateGymParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(gym_response("Gym updated successfully", detail)),
    ))
}

/// Delete a gym with an empty roster.
///
/// Messages and join requests that referenced the gym are kept.
///
/// # Access Control
/// - `Owner`
#[utoipa::path(
    delete,
    path = "/api/gyms/{id}",
    tag = GYM_TAG,
    params(
        ("id" = i32, Path, description = "Gym ID")
    ),
    responses(
        (status = 200, description = "Gym deleted", body = MessageResponseDto),
        (status = 400, description = "Invalid ID, or the gym still has trainers or members", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the platform owner", body = ErrorDto),
        (status = 404, description = "Gym not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Owner])
        .await?;

    GymService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Gym deleted successfully")),
    ))
}

/// Get the caller's own gym with owner, trainers and members.
///
/// # Access Control
/// - `Gym`
#[utoipa::path(
    get,
    path = "/api/gyms/my-gym",
    tag = GYM_TAG,
    responses(
        (status = 200, description = "The caller's gym", body = GymDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a Gym account", body = ErrorDto),
        (status = 404, description = "Caller owns no gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_my_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Gym])
        .await?;

    let detail = GymService::new(&state.db).get_own(&owner).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Create the caller's own gym.
///
/// `ownerEmail` is ignored; the gym belongs to the calling Gym account.
///
/// # Access Control
/// - `Gym`
#[utoipa::path(
    post,
    path = "/api/gyms/my-gym",
    tag = GYM_TAG,
    request_body = CreateGymDto,
    responses(
        (status = 201, description = "Gym created", body = GymResponseDto),
        (status = 400, description = "Missing fields or caller already owns a gym", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a Gym account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_my_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateGymDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Gym])
        .await?;

    let detail = GymService::new(&state.db)
        .create_own(&owner, NewGymInput::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(gym_response("Gym created successfully", detail)),
    ))
}

/// Update the caller's own gym.
///
/// # Access Control
/// - `Gym`
#[utoipa::path(
    put,
    path = "/api/gyms/my-gym",
    tag = GYM_TAG,
    request_body = UpdateGymDto,
    responses(
        (status = 200, description = "Gym updated", body = GymResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a Gym account", body = ErrorDto),
        (status = 404, description = "Caller owns no gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_my_gym(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<UpdateGymDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Gym])
        .await?;

    let detail = GymService::new(&state.db)
        .update_own(&owner, UpdateGymParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(gym_response("Gym updated successfully", detail)),
    ))
}
