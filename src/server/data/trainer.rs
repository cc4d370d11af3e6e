use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    trainer::{Trainer, TrainerWithUser},
    user::User,
};

pub struct TrainerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Puts an account on a gym's trainer roster.
    ///
    /// # Returns
    /// - `Ok(Trainer)` - The created roster row
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   account is already on a roster
    pub async fn create(
        &self,
        user_id: i32,
        gym_id: i32,
        contact_number: Option<String>,
    ) -> Result<Trainer, DbErr> {
        let entity = entity::trainer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            gym_id: ActiveValue::Set(gym_id),
            contact_number: ActiveValue::Set(contact_number),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trainer::from_entity(entity))
    }

    /// Finds the roster row of a trainer account.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Trainer>, DbErr> {
        Ok(entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Trainer::from_entity))
    }

    /// Finds a trainer by roster id, but only within the given gym.
    pub async fn find_in_gym(&self, id: i32, gym_id: i32) -> Result<Option<Trainer>, DbErr> {
        Ok(entity::prelude::Trainer::find_by_id(id)
            .filter(entity::trainer::Column::GymId.eq(gym_id))
            .one(self.db)
            .await?
            .map(Trainer::from_entity))
    }

    /// Finds the roster row of `user_id` if it belongs to the given gym.
    pub async fn find_by_user_in_gym(
        &self,
        user_id: i32,
        gym_id: i32,
    ) -> Result<Option<Trainer>, DbErr> {
        Ok(entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::UserId.eq(user_id))
            .filter(entity::trainer::Column::GymId.eq(gym_id))
            .one(self.db)
            .await?
            .map(Trainer::from_entity))
    }

    /// Gets a gym's trainers with their accounts, oldest first.
    pub async fn get_by_gym_with_users(&self, gym_id: i32) -> Result<Vec<TrainerWithUser>, DbErr> {
        let rows = entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::GymId.eq(gym_id))
            .order_by_asc(entity::trainer::Column::CreatedAt)
            .order_by_asc(entity::trainer::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(trainer, user)| {
                let user = user.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Account of trainer {} not found", trainer.id))
                })?;

                Ok(TrainerWithUser {
                    trainer: Trainer::from_entity(trainer),
                    user: User::from_entity(user)?,
                })
            })
            .collect()
    }

    pub async fn count_by_gym(&self, gym_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::GymId.eq(gym_id))
            .count(self.db)
            .await
    }

    /// Replaces the contact number of a trainer.
    pub async fn update_contact_number(
        &self,
        id: i32,
        contact_number: Option<String>,
    ) -> Result<Trainer, DbErr> {
        let entity = entity::trainer::ActiveModel {
            id: ActiveValue::Unchanged(id),
            contact_number: ActiveValue::Set(contact_number),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Trainer::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Trainer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
