//! Membership factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating memberships for an existing member.
pub struct MembershipFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    gym_id: i32,
    join_date: DateTime<Utc>,
    expiry_date: DateTime<Utc>,
}

impl<'a> MembershipFactory<'a> {
    /// Creates a new MembershipFactory.
    ///
    /// Defaults:
    /// - join_date: now
    /// - expiry_date: 30 days from now
    pub fn new(db: &'a DatabaseConnection, member_id: i32, gym_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            member_id,
            gym_id,
            join_date: now,
            expiry_date: now + Duration::days(30),
        }
    }

    pub fn join_date(mut self, join_date: DateTime<Utc>) -> Self {
        self.join_date = join_date;
        self
    }

    pub fn expiry_date(mut self, expiry_date: DateTime<Utc>) -> Self {
        self.expiry_date = expiry_date;
        self
    }

    pub async fn build(self) -> Result<entity::membership::Model, DbErr> {
        entity::membership::ActiveModel {
            id: ActiveValue::NotSet,
            member_id: ActiveValue::Set(self.member_id),
            gym_id: ActiveValue::Set(self.gym_id),
            join_date: ActiveValue::Set(self.join_date),
            expiry_date: ActiveValue::Set(self.expiry_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 30 day membership starting now for the given member.
pub async fn create_membership(
    db: &DatabaseConnection,
    member: &entity::member::Model,
) -> Result<entity::membership::Model, DbErr> {
    MembershipFactory::new(db, member.id, member.gym_id)
        .build()
        .await
}
