//! Message factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a message from `sender_id` to `recipient_id` within `gym_id`.
pub async fn create_message(
    db: &DatabaseConnection,
    sender_id: i32,
    recipient_id: i32,
    gym_id: i32,
    content: &str,
) -> Result<entity::message::Model, DbErr> {
    create_message_at(db, sender_id, recipient_id, gym_id, content, Utc::now()).await
}

/// Creates a message with an explicit send time.
pub async fn create_message_at(
    db: &DatabaseConnection,
    sender_id: i32,
    recipient_id: i32,
    gym_id: i32,
    content: &str,
    sent_at: DateTime<Utc>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        id: ActiveValue::NotSet,
        sender_id: ActiveValue::Set(sender_id),
        recipient_id: ActiveValue::Set(recipient_id),
        gym_id: ActiveValue::Set(Some(gym_id)),
        content: ActiveValue::Set(content.to_string()),
        sent_at: ActiveValue::Set(sent_at),
    }
    .insert(db)
    .await
}
