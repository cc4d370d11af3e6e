use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{
            gym::GymRepository, join_request::JoinRequestRepository, member::MemberRepository,
            trainer::TrainerRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            gym::{Gym, GymDetail, GymDirectoryEntry, NewGymInput, UpdateGymParams},
            user::{normalize_email, User},
        },
    },
};

pub struct GymService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GymService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a gym on behalf of an existing Gym account.
    ///
    /// # Returns
    /// - `Ok(GymDetail)` - The created gym
    /// - `Err(AppError::BadRequest)` - Missing fields, unknown or non-Gym
    ///   owner email, or the owner already has a gym
    pub async fn create(&self, input: NewGymInput) -> Result<GymDetail, AppError> {
        if input.name.is_empty()
            || input.address.is_empty()
            || input.owner_full_name.is_none()
            || input.owner_phone.is_none()
        {
            return Err(AppError::bad_request(
                "Name, address, and owner details (fullName, phone) are required",
            ));
        }

        let owner = match &input.owner_email {
            Some(email) => {
                UserRepository::new(self.db)
                    .find_by_email(&normalize_email(email))
                    .await?
            }
            None => None,
        }
        .filter(|user| user.role == Role::Gym)
        .ok_or_else(|| {
            AppError::bad_request("Gym owner email must correspond to an existing Gym user")
        })?;

        self.create_for_owner(owner, input).await
    }

    /// Creates the calling Gym account's own gym.
    pub async fn create_own(&self, owner: &User, input: NewGymInput) -> Result<GymDetail, AppError> {
        if input.name.is_empty() || input.address.is_empty() {
            return Err(AppError::bad_request("Name and address are required"));
        }

        self.create_for_owner(owner.clone(), input).await
    }

    async fn create_for_owner(
        &self,
        owner: User,
        input: NewGymInput,
    ) -> Result<GymDetail, AppError> {
        if GymRepository::new(self.db)
            .find_by_owner(owner.id)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request("This gym owner already has a gym"));
        }

        let txn = self.db.begin().await?;
        let gym = GymRepository::new(&txn)
            .create(input.into_params(owner.id))
            .await
            .map_err(AppError::duplicate("This gym owner already has a gym"))?;
        txn.commit().await?;

        tracing::info!("Created gym {} for owner {}", gym.id, owner.id);

        Ok(GymDetail {
            gym,
            owner: Some(owner),
            trainers: Vec::new(),
            members: Vec::new(),
        })
    }

    pub async fn get_all(&self) -> Result<Vec<GymDetail>, AppError> {
        let gyms = GymRepository::new(self.db).get_all().await?;

        let mut details = Vec::with_capacity(gyms.len());
        for gym in gyms {
            details.push(self.detail(gym).await?);
        }

        Ok(details)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<GymDetail, AppError> {
        let gym = GymRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Gym not found"))?;

        self.detail(gym).await
    }

    /// The gym owned by the calling Gym account, with its roster.
    pub async fn get_own(&self, owner: &User) -> Result<GymDetail, AppError> {
        let gym = GymRepository::new(self.db)
            .find_by_owner(owner.id)
            .await?
            .ok_or_else(|| AppError::not_found("Gym not found for this owner"))?;

        self.detail(gym).await
    }

    /// Public directory of every gym.
    ///
    /// For Member callers each entry says whether the caller is already
    /// waiting on a join request for that gym.
    pub async fn directory(&self, user: &User) -> Result<Vec<GymDirectoryEntry>, AppError> {
        let pending = match user.role {
            Role::Member => {
                JoinRequestRepository::new(self.db)
                    .pending_gym_ids_for_user(user.id)
                    .await?
            }
            _ => Default::default(),
        };

        let gyms = GymRepository::new(self.db).get_all().await?;

        let mut entries = Vec::with_capacity(gyms.len());
        for gym in gyms {
            let has_pending_request = pending.contains(&gym.id);
            entries.push(GymDirectoryEntry {
                detail: self.detail(gym).await?,
                has_pending_request,
            });
        }

        Ok(entries)
    }

    pub async fn update(&self, id: i32, params: UpdateGymParams) -> Result<GymDetail, AppError> {
        let txn = self.db.begin().await?;
        let gym = GymRepository::new(&txn).update(id, params).await?;
        txn.commit().await?;

        let gym = gym.ok_or_else(|| AppError::not_found("Gym not found"))?;

        self.detail(gym).await
    }

    pub async fn update_own(
        &self,
        owner: &User,
        params: UpdateGymParams,
    ) -> Result<GymDetail, AppError> {
        let gym = GymRepository::new(self.db)
            .find_by_owner(owner.id)
            .await?
            .ok_or_else(|| AppError::not_found("Gym not found for this owner"))?;

        self.update(gym.id, params).await
    }

    /// Deletes a gym whose roster is empty.
    ///
    /// Messages and join requests that referenced the gym are kept.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = GymRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(AppError::not_found("Gym not found"));
        }

        let trainers = TrainerRepository::new(self.db).count_by_gym(id).await?;
        let members = MemberRepository::new(self.db).count_by_gym(id).await?;
        if trainers > 0 || members > 0 {
            return Err(AppError::bad_request(
                "Remove the gym's trainers and members before deleting it",
            ));
        }

        if !repo.delete(id).await? {
            return Err(AppError::not_found("Gym not found"));
        }

        tracing::info!("Deleted gym {}", id);

        Ok(())
    }

    /// Loads the owner account and roster of a gym.
    pub async fn detail(&self, gym: Gym) -> Result<GymDetail, AppError> {
        let owner = UserRepository::new(self.db).find_by_id(gym.owner_id).await?;
        let trainers = TrainerRepository::new(self.db)
            .get_by_gym_with_users(gym.id)
            .await?;
        let members = MemberRepository::new(self.db)
            .get_by_gym_with_users(gym.id)
            .await?;

        Ok(GymDetail {
            gym,
            owner,
            trainers,
            members,
        })
    }
}
