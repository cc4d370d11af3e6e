use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        message::{
            MemberConversationDto, SendMessageDto, SendMessageResponseDto, TrainerConversationDto,
        },
        user::Role,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::message::MessageService,
        state::AppState, util::extract::JsonBody,
    },
};

/// Tag for grouping messaging endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "messages";

/// Send a message to a counterpart in the sender's gym.
///
/// Members write to trainers of their gym and trainers write to members of
/// theirs.
///
/// # Access Control
/// - `Member`
/// - `Trainer`
///
/// # Returns
/// - `201 Created` - Stored message
/// - `400 Bad Request` - Missing recipient or blank content
/// - `404 Not Found` - Recipient is not a counterpart in the gym
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = SendMessageResponseDto),
        (status = 400, description = "Missing recipient or content", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member or trainer", body = ErrorDto),
        (status = 404, description = "Recipient not found in your gym", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let sender = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Member, Role::Trainer])
        .await?;

    let message = MessageService::new(&state.db)
        .send(&sender, payload.recipient_id, payload.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponseDto {
            message: "Message sent successfully".to_string(),
            data: message.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/messages/member",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Trainers of the gym and the caller's messages with them", body = MemberConversationDto),
        (status = 400, description = "Caller is not on a gym roster", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_member_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Member])
        .await?;

    let conversation = MessageService::new(&state.db)
        .member_conversation(&user)
        .await?;

    Ok((StatusCode::OK, Json(conversation.into_member_dto())))
}

#[utoipa::path(
    get,
    path = "/api/messages/trainer",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Members of the gym and the caller's messages with them", body = TrainerConversationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a trainer on a gym roster", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_trainer_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Trainer])
        .await?;

    let conversation = MessageService::new(&state.db)
        .trainer_conversation(&user)
        .await?;

    Ok((StatusCode::OK, Json(conversation.into_trainer_dto())))
}
