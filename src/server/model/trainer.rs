use chrono::{DateTime, Utc};

use crate::{model::trainer::TrainerDto, server::model::user::User};

/// A trainer roster row.
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pub id: i32,
    pub user_id: i32,
    pub gym_id: i32,
    pub contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Trainer {
    pub fn from_entity(entity: entity::trainer::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            gym_id: entity.gym_id,
            contact_number: entity.contact_number,
            created_at: entity.created_at,
        }
    }
}

/// A trainer roster row with its account.
#[derive(Debug, Clone)]
pub struct TrainerWithUser {
    pub trainer: Trainer,
    pub user: User,
}

impl TrainerWithUser {
    pub fn into_dto(self) -> TrainerDto {
        TrainerDto {
            id: self.trainer.id,
            gym_id: self.trainer.gym_id,
            contact_number: self.trainer.contact_number,
            user: self.user.to_summary_dto(),
            created_at: self.trainer.created_at,
        }
    }
}
