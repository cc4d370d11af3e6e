use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageResponseDto},
        trainer::{CreateTrainerDto, TrainerDto, TrainerResponseDto, UpdateTrainerDto},
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::trainer::TrainerWithUser,
        service::trainer::TrainerService, state::AppState, util::extract::{JsonBody, PathParam},
    },
};

/// Tag for grouping trainer roster endpoints in OpenAPI documentation
pub static TRAINER_TAG: &str = "trainer";

/// Add an existing Trainer account to the caller's gym.
///
/// # Access Control
/// - `Gym` - Only the gym's owner manages its trainers
///
/// # Returns
/// - `201 Created` - Trainer added
/// - `400 Bad Request` - Blank email, no such Trainer account, or the trainer
///   is already on a roster
/// - `403 Forbidden` - Caller owns no gym or is not a Gym account
#[utoipa::path(
    post,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    request_body = CreateTrainerDto,
    responses(
        (status = 201, description = "Trainer added", body = TrainerResponseDto),
        (status = 400, description = "Invalid trainer data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a gym owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_trainer(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateTrainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Gym])
        .await?;

    let trainer = TrainerService::new(&state.db)
        .add(&owner, &payload.trainer_email, payload.contact_number)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TrainerResponseDto {
            message: "Trainer added successfully".to_string(),
            trainer: trainer.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    responses(
        (status = 200, description = "Trainers of the caller's gym", body = Vec<TrainerDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a gym owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_trainers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Gym])
        .await?;

    let trainers = TrainerService::new(&state.db).list(&owner).await?;

    Ok((
        StatusCode::OK,
        Json(
            trainers
                .into_iter()
                .map(TrainerWithUser::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    put,
    path = "/api/trainers/{id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    request_body = UpdateTrainerDto,
    responses(
        (status = 200, description = "Trainer updated", body = TrainerResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a gym owner", body = ErrorDto),
        (status = 404, description = "Trainer not found in your gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_trainer(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateTrainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Gym])
        .await?;

    let trainer = TrainerService::new(&state.db)
        .update(&owner, id, payload.contact_number)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TrainerResponseDto {
            message: "Trainer updated successfully".to_string(),
            trainer: trainer.into_dto(),
        }),
    ))
}

/// Remove a trainer from the caller's gym.
///
/// Plans the trainer wrote are kept without an author.
#[utoipa::path(
    delete,
    path = "/api/trainers/{id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 200, description = "Trainer removed", body = MessageResponseDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a gym owner", body = ErrorDto),
        (status = 404, description = "Trainer not found in your gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_trainer(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Gym])
        .await?;

    TrainerService::new(&state.db).remove(&owner, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponseDto::new("Trainer removed successfully")),
    ))
}
