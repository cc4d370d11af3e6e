//! Gym data repository.
//!
//! A gym is stored across three tables: the gym row, its ordered photos and
//! its membership plan catalog. `create` and `update` write all three and
//! should run inside a transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::gym::{CreateGymParams, Gym, MembershipPlan, UpdateGymParams};

pub struct GymRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GymRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a gym with its photos and membership plan catalog.
    ///
    /// # Returns
    /// - `Ok(Gym)` - The created gym with photos and plans
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   owner already owns a gym
    pub async fn create(&self, params: CreateGymParams) -> Result<Gym, DbErr> {
        let gym = entity::gym::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            owner_id: ActiveValue::Set(params.owner_id),
            owner_full_name: ActiveValue::Set(params.owner_full_name),
            owner_phone: ActiveValue::Set(params.owner_phone),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.replace_photos(gym.id, params.photos).await?;
        self.replace_membership_plans(gym.id, params.membership_plans)
            .await?;

        self.load(gym).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Gym>, DbErr> {
        match entity::prelude::Gym::find_by_id(id).one(self.db).await? {
            Some(gym) => Ok(Some(self.load(gym).await?)),
            None => Ok(None),
        }
    }

    /// Finds the gym owned by a Gym-role account.
    pub async fn find_by_owner(&self, owner_id: i32) -> Result<Option<Gym>, DbErr> {
        let gym = entity::prelude::Gym::find()
            .filter(entity::gym::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await?;

        match gym {
            Some(gym) => Ok(Some(self.load(gym).await?)),
            None => Ok(None),
        }
    }

    /// Gets every gym ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Gym>, DbErr> {
        let gyms = entity::prelude::Gym::find()
            .order_by_asc(entity::gym::Column::Name)
            .order_by_asc(entity::gym::Column::Id)
            .all(self.db)
            .await?;

        if gyms.is_empty() {
            return Ok(Vec::new());
        }

        let gym_ids: Vec<i32> = gyms.iter().map(|g| g.id).collect();

        let mut photos: HashMap<i32, Vec<entity::gym_photo::Model>> = HashMap::new();
        for photo in entity::prelude::GymPhoto::find()
            .filter(entity::gym_photo::Column::GymId.is_in(gym_ids.clone()))
            .order_by_asc(entity::gym_photo::Column::Position)
            .all(self.db)
            .await?
        {
            photos.entry(photo.gym_id).or_default().push(photo);
        }

        let mut plans: HashMap<i32, Vec<entity::membership_plan::Model>> = HashMap::new();
        for plan in entity::prelude::MembershipPlan::find()
            .filter(entity::membership_plan::Column::GymId.is_in(gym_ids))
            .order_by_asc(entity::membership_plan::Column::Id)
            .all(self.db)
            .await?
        {
            plans.entry(plan.gym_id).or_default().push(plan);
        }

        Ok(gyms
            .into_iter()
            .map(|gym| {
                let gym_photos = photos.remove(&gym.id).unwrap_or_default();
                let gym_plans = plans.remove(&gym.id).unwrap_or_default();
                Gym::from_entity(gym, gym_photos, gym_plans)
            })
            .collect())
    }

    /// Applies a partial update.
    ///
    /// `None` fields keep their stored values; a supplied photo or plan list
    /// replaces the stored list.
    ///
    /// # Returns
    /// - `Ok(Some(Gym))` - The updated gym
    /// - `Ok(None)` - No gym with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: UpdateGymParams) -> Result<Option<Gym>, DbErr> {
        let Some(gym) = entity::prelude::Gym::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::gym::ActiveModel = gym.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(full_name) = params.owner_full_name {
            active.owner_full_name = ActiveValue::Set(Some(full_name));
        }
        if let Some(phone) = params.owner_phone {
            active.owner_phone = ActiveValue::Set(Some(phone));
        }
        let gym = active.update(self.db).await?;

        if let Some(photos) = params.photos {
            self.replace_photos(id, photos).await?;
        }
        if let Some(plans) = params.membership_plans {
            self.replace_membership_plans(id, plans).await?;
        }

        Ok(Some(self.load(gym).await?))
    }

    /// Deletes a gym together with its photos and membership plan catalog.
    ///
    /// Messages and join requests keep their rows with the gym cleared. Fails
    /// with a foreign key violation while trainers or members remain.
    ///
    /// # Returns
    /// - `Ok(true)` - Gym deleted
    /// - `Ok(false)` - No gym with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Gym::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Gym::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    async fn load(&self, gym: entity::gym::Model) -> Result<Gym, DbErr> {
        let photos = entity::prelude::GymPhoto::find()
            .filter(entity::gym_photo::Column::GymId.eq(gym.id))
            .order_by_asc(entity::gym_photo::Column::Position)
            .all(self.db)
            .await?;

        let plans = entity::prelude::MembershipPlan::find()
            .filter(entity::membership_plan::Column::GymId.eq(gym.id))
            .order_by_asc(entity::membership_plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(Gym::from_entity(gym, photos, plans))
    }

    async fn replace_photos(&self, gym_id: i32, photos: Vec<String>) -> Result<(), DbErr> {
        entity::prelude::GymPhoto::delete_many()
            .filter(entity::gym_photo::Column::GymId.eq(gym_id))
            .exec(self.db)
            .await?;

        for (position, url) in photos.into_iter().enumerate() {
            entity::gym_photo::ActiveModel {
                gym_id: ActiveValue::Set(gym_id),
                url: ActiveValue::Set(url),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    async fn replace_membership_plans(
        &self,
        gym_id: i32,
        plans: Vec<MembershipPlan>,
    ) -> Result<(), DbErr> {
        entity::prelude::MembershipPlan::delete_many()
            .filter(entity::membership_plan::Column::GymId.eq(gym_id))
            .exec(self.db)
            .await?;

        for plan in plans {
            entity::membership_plan::ActiveModel {
                gym_id: ActiveValue::Set(gym_id),
                plan_name: ActiveValue::Set(plan.plan_name),
                price: ActiveValue::Set(plan.price),
                duration: ActiveValue::Set(plan.duration),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
