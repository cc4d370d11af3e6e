//! Gym factory for creating test gyms.

use crate::factory::{helpers::next_id, user::create_user_with_role};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test gyms owned by an existing Gym account.
///
/// # Example
///
/// ```rust,ignore
/// let gym = GymFactory::new(&db, owner.id)
///     .name("Iron Temple")
///     .build()
///     .await?;
/// ```
pub struct GymFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    address: String,
    owner_full_name: Option<String>,
    owner_phone: Option<String>,
}

impl<'a> GymFactory<'a> {
    /// Creates a new GymFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Gym {id}"`
    /// - address: `"{id} Main Street"`
    /// - owner details: none
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Gym {}", id),
            address: format!("{} Main Street", id),
            owner_full_name: None,
            owner_phone: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn owner_details(mut self, full_name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.owner_full_name = Some(full_name.into());
        self.owner_phone = Some(phone.into());
        self
    }

    /// Builds and inserts the gym into the database.
    pub async fn build(self) -> Result<entity::gym::Model, DbErr> {
        entity::gym::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            owner_id: ActiveValue::Set(self.owner_id),
            owner_full_name: ActiveValue::Set(self.owner_full_name),
            owner_phone: ActiveValue::Set(self.owner_phone),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Gym account and a gym owned by it.
///
/// # Returns
/// - `Ok((owner, gym))` - The owning account and the gym
/// - `Err(DbErr)` - Database error during insert
pub async fn create_gym(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::gym::Model), DbErr> {
    let owner = create_user_with_role(db, "Gym").await?;
    let gym = GymFactory::new(db, owner.id).build().await?;

    Ok((owner, gym))
}

/// Creates a photo entry for a gym at the given position.
pub async fn create_gym_photo(
    db: &DatabaseConnection,
    gym_id: i32,
    url: impl Into<String>,
    position: i32,
) -> Result<entity::gym_photo::Model, DbErr> {
    entity::gym_photo::ActiveModel {
        id: ActiveValue::NotSet,
        gym_id: ActiveValue::Set(gym_id),
        url: ActiveValue::Set(url.into()),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}

/// Creates a catalog entry for a gym.
pub async fn create_membership_plan(
    db: &DatabaseConnection,
    gym_id: i32,
    plan_name: impl Into<String>,
    price: f64,
    duration: i32,
) -> Result<entity::membership_plan::Model, DbErr> {
    entity::membership_plan::ActiveModel {
        id: ActiveValue::NotSet,
        gym_id: ActiveValue::Set(gym_id),
        plan_name: ActiveValue::Set(plan_name.into()),
        price: ActiveValue::Set(price),
        duration: ActiveValue::Set(duration),
    }
    .insert(db)
    .await
}
