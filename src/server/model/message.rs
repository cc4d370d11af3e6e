use chrono::{DateTime, Utc};

use crate::{
    model::message::{ChatMessageDto, MemberConversationDto, TrainerConversationDto},
    server::model::user::User,
};

/// A direct message between a member and a trainer of the same gym.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub gym_id: Option<i32>,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            sender_id: entity.sender_id,
            recipient_id: entity.recipient_id,
            gym_id: entity.gym_id,
            content: entity.content,
            sent_at: entity.sent_at,
        }
    }

    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            sender_id: self.sender_id,
            recipient_id: self.recipient_id,
            gym_id: self.gym_id,
            content: self.content,
            sent_at: self.sent_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub sender_id: i32,
    pub recipient_id: i32,
    pub gym_id: i32,
    pub content: String,
}

/// The accounts a caller may message and the messages exchanged with them.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub counterparts: Vec<User>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn into_member_dto(self) -> MemberConversationDto {
        MemberConversationDto {
            trainers: self.counterparts.iter().map(User::to_summary_dto).collect(),
            messages: self.messages.into_iter().map(Message::into_dto).collect(),
        }
    }

    pub fn into_trainer_dto(self) -> TrainerConversationDto {
        TrainerConversationDto {
            members: self.counterparts.iter().map(User::to_summary_dto).collect(),
            messages: self.messages.into_iter().map(Message::into_dto).collect(),
        }
    }
}
