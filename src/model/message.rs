use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub gym_id: Option<i32>,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageDto {
    pub recipient_id: Option<i32>,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SendMessageResponseDto {
    pub message: String,
    pub data: ChatMessageDto,
}

/// Conversation view for a member: the gym's trainers and every message
/// exchanged with them.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MemberConversationDto {
    pub trainers: Vec<UserSummaryDto>,
    pub messages: Vec<ChatMessageDto>,
}

/// Conversation view for a trainer: the gym's members and every message
/// exchanged with them.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TrainerConversationDto {
    pub members: Vec<UserSummaryDto>,
    pub messages: Vec<ChatMessageDto>,
}
