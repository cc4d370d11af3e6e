//! Resolution of the gym a caller acts within.
//!
//! Gym accounts act within the gym they own, trainers and members within the
//! gym whose roster they are on. Every scoped operation resolves the caller's
//! gym here before touching gym data.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{gym::GymRepository, member::MemberRepository, trainer::TrainerRepository},
        error::{auth::AuthError, AppError},
        model::{gym::Gym, member::Member, trainer::Trainer, user::User},
    },
};

pub struct GymScope<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GymScope<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The gym owned by a Gym account.
    ///
    /// # Returns
    /// - `Err(AppError::Forbidden)` - The account owns no gym
    pub async fn owned_gym(&self, user: &User) -> Result<Gym, AppError> {
        GymRepository::new(self.db)
            .find_by_owner(user.id)
            .await?
            .ok_or_else(|| AppError::forbidden("You are not associated with a gym"))
    }

    /// The roster row of a Trainer account.
    ///
    /// # Returns
    /// - `Err(AppError::Forbidden)` - The account is on no roster
    pub async fn trainer(&self, user: &User) -> Result<Trainer, AppError> {
        TrainerRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?
            .ok_or_else(|| AppError::forbidden("Trainer not assigned to any gym"))
    }

    /// The roster row of a Member account.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The account is on no roster
    pub async fn member(&self, user: &User) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?
            .ok_or_else(|| AppError::bad_request("You are not a member of any gym"))
    }

    /// Gym id for staff operations shared by gym owners and trainers.
    pub async fn staff_gym_id(&self, user: &User) -> Result<i32, AppError> {
        match user.role {
            Role::Gym => Ok(self.owned_gym(user).await?.id),
            Role::Trainer => Ok(self.trainer(user).await?.gym_id),
            role => Err(AuthError::AccessDenied {
                user_id: user.id,
                role,
                reason: "not staff of any gym".to_string(),
            }
            .into()),
        }
    }
}
