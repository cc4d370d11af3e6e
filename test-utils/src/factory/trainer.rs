//! Trainer factory for adding trainers to a gym roster.

use crate::factory::user::create_user_with_role;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating trainer roster rows for an existing account.
pub struct TrainerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    gym_id: i32,
    contact_number: Option<String>,
}

impl<'a> TrainerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, gym_id: i32) -> Self {
        Self {
            db,
            user_id,
            gym_id,
            contact_number: None,
        }
    }

    pub fn contact_number(mut self, contact_number: impl Into<String>) -> Self {
        self.contact_number = Some(contact_number.into());
        self
    }

    /// Builds and inserts the trainer row into the database.
    pub async fn build(self) -> Result<entity::trainer::Model, DbErr> {
        entity::trainer::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            gym_id: ActiveValue::Set(self.gym_id),
            contact_number: ActiveValue::Set(self.contact_number),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Trainer account and puts it on the roster of `gym_id`.
///
/// # Returns
/// - `Ok((account, trainer))` - The trainer account and roster row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_trainer(
    db: &DatabaseConnection,
    gym_id: i32,
) -> Result<(entity::user::Model, entity::trainer::Model), DbErr> {
    let user = create_user_with_role(db, "Trainer").await?;
    let trainer = TrainerFactory::new(db, user.id, gym_id).build().await?;

    Ok((user, trainer))
}
