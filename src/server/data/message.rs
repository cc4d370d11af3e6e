use chrono::Utc;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::message::{CreateMessageParams, Message};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            sender_id: ActiveValue::Set(params.sender_id),
            recipient_id: ActiveValue::Set(params.recipient_id),
            gym_id: ActiveValue::Set(Some(params.gym_id)),
            content: ActiveValue::Set(params.content),
            sent_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets every message in a gym exchanged between `user_id` and any of
    /// `counterpart_ids`, in either direction, oldest first.
    pub async fn get_conversation(
        &self,
        user_id: i32,
        counterpart_ids: &[i32],
        gym_id: i32,
    ) -> Result<Vec<Message>, DbErr> {
        if counterpart_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sent = Condition::all()
            .add(entity::message::Column::SenderId.eq(user_id))
            .add(entity::message::Column::RecipientId.is_in(counterpart_ids.iter().copied()));
        let received = Condition::all()
            .add(entity::message::Column::RecipientId.eq(user_id))
            .add(entity::message::Column::SenderId.is_in(counterpart_ids.iter().copied()));

        let messages = entity::prelude::Message::find()
            .filter(entity::message::Column::GymId.eq(gym_id))
            .filter(Condition::any().add(sent).add(received))
            .order_by_asc(entity::message::Column::SentAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(messages.into_iter().map(Message::from_entity).collect())
    }
}
