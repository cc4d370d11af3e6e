//! Trainer roster management for gym owners.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{plan::PlanRepository, trainer::TrainerRepository, user::UserRepository},
        error::{internal::InternalError, AppError},
        model::{
            trainer::{Trainer, TrainerWithUser},
            user::{normalize_email, User},
        },
        service::scope::GymScope,
        util::parse::non_blank,
    },
};

pub struct TrainerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an existing Trainer account to the caller's gym.
    ///
    /// # Returns
    /// - `Ok(TrainerWithUser)` - The new roster row with its account
    /// - `Err(AppError::BadRequest)` - Blank email, no such Trainer account, or
    ///   the account is already on a roster
    /// - `Err(AppError::Forbidden)` - Caller owns no gym
    pub async fn add(
        &self,
        owner: &User,
        trainer_email: &str,
        contact_number: Option<String>,
    ) -> Result<TrainerWithUser, AppError> {
        let email = normalize_email(trainer_email);
        if email.is_empty() {
            return Err(AppError::bad_request("Trainer email is required"));
        }

        let gym = GymScope::new(self.db).owned_gym(owner).await?;

        let user = UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .filter(|user| user.role == Role::Trainer)
            .ok_or_else(|| {
                AppError::bad_request("Trainer email must correspond to an existing Trainer user")
            })?;

        let repo = TrainerRepository::new(self.db);
        if let Some(existing) = repo.find_by_user_id(user.id).await? {
            let message = if existing.gym_id == gym.id {
                "Trainer already assigned to this gym"
            } else {
                "Trainer already assigned to another gym"
            };
            return Err(AppError::bad_request(message));
        }

        let trainer = repo
            .create(user.id, gym.id, non_blank(contact_number))
            .await?;

        tracing::info!("Added trainer {} to gym {}", trainer.id, gym.id);

        Ok(TrainerWithUser { trainer, user })
    }

    pub async fn list(&self, owner: &User) -> Result<Vec<TrainerWithUser>, AppError> {
        let gym = GymScope::new(self.db).owned_gym(owner).await?;

        Ok(TrainerRepository::new(self.db)
            .get_by_gym_with_users(gym.id)
            .await?)
    }

    /// Updates the contact number of a trainer in the caller's gym.
    ///
    /// An absent or blank number keeps the stored one.
    pub async fn update(
        &self,
        owner: &User,
        id: i32,
        contact_number: Option<String>,
    ) -> Result<TrainerWithUser, AppError> {
        let mut trainer = self.find_in_owned_gym(owner, id).await?;

        if let Some(contact_number) = non_blank(contact_number) {
            trainer = TrainerRepository::new(self.db)
                .update_contact_number(trainer.id, Some(contact_number))
                .await?;
        }

        let user = UserRepository::new(self.db)
            .find_by_id(trainer.user_id)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Trainer account",
                id: trainer.user_id,
            })?;

        Ok(TrainerWithUser { trainer, user })
    }

    /// Removes a trainer from the caller's gym.
    ///
    /// Plans the trainer wrote stay with their members, without an author.
    pub async fn remove(&self, owner: &User, id: i32) -> Result<(), AppError> {
        let trainer = self.find_in_owned_gym(owner, id).await?;

        let txn = self.db.begin().await?;
        let detached = PlanRepository::new(&txn).detach_trainer(trainer.id).await?;
        TrainerRepository::new(&txn).delete(trainer.id).await?;
        txn.commit().await?;

        tracing::info!(
            "Removed trainer {} from gym {}, {} plans detached",
            trainer.id,
            trainer.gym_id,
            detached
        );

        Ok(())
    }

    async fn find_in_owned_gym(&self, owner: &User, id: i32) -> Result<Trainer, AppError> {
        let gym = GymScope::new(self.db).owned_gym(owner).await?;

        TrainerRepository::new(self.db)
            .find_in_gym(id, gym.id)
            .await?
            .ok_or_else(|| AppError::not_found("Trainer not found in your gym"))
    }
}
