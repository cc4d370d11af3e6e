use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::member::MemberRepository,
    model::membership::{CreateMembershipParams, Membership, MembershipWithMember},
};

pub struct MembershipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a membership for a member of `gym_id`.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The created membership
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   member already holds a membership
    pub async fn create(
        &self,
        gym_id: i32,
        params: CreateMembershipParams,
    ) -> Result<Membership, DbErr> {
        let entity = entity::membership::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            gym_id: ActiveValue::Set(gym_id),
            join_date: ActiveValue::Set(params.join_date),
            expiry_date: ActiveValue::Set(params.expiry_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Membership>, DbErr> {
        Ok(entity::prelude::Membership::find_by_id(id)
            .one(self.db)
            .await?
            .map(Membership::from_entity))
    }

    /// Finds a membership by id, but only within the given gym.
    pub async fn find_in_gym(&self, id: i32, gym_id: i32) -> Result<Option<Membership>, DbErr> {
        Ok(entity::prelude::Membership::find_by_id(id)
            .filter(entity::membership::Column::GymId.eq(gym_id))
            .one(self.db)
            .await?
            .map(Membership::from_entity))
    }

    pub async fn find_by_member_id(&self, member_id: i32) -> Result<Option<Membership>, DbErr> {
        Ok(entity::prelude::Membership::find()
            .filter(entity::membership::Column::MemberId.eq(member_id))
            .one(self.db)
            .await?
            .map(Membership::from_entity))
    }

    /// Gets a gym's memberships with the holding member's account, soonest
    /// expiry first.
    pub async fn get_by_gym_with_members(
        &self,
        gym_id: i32,
    ) -> Result<Vec<MembershipWithMember>, DbErr> {
        let memberships = entity::prelude::Membership::find()
            .filter(entity::membership::Column::GymId.eq(gym_id))
            .order_by_asc(entity::membership::Column::ExpiryDate)
            .order_by_asc(entity::membership::Column::Id)
            .all(self.db)
            .await?;

        let member_ids: Vec<i32> = memberships.iter().map(|m| m.member_id).collect();
        let users = MemberRepository::new(self.db)
            .get_users_by_member_ids(&member_ids)
            .await?;

        memberships
            .into_iter()
            .map(|membership| {
                let user = users.get(&membership.member_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Member account of membership {} not found",
                        membership.id
                    ))
                })?;

                Ok(MembershipWithMember {
                    membership: Membership::from_entity(membership),
                    user,
                })
            })
            .collect()
    }

    /// Replaces the dates of a membership.
    pub async fn update_dates(
        &self,
        id: i32,
        join_date: DateTime<Utc>,
        expiry_date: DateTime<Utc>,
    ) -> Result<Membership, DbErr> {
        let entity = entity::membership::ActiveModel {
            id: ActiveValue::Unchanged(id),
            join_date: ActiveValue::Set(join_date),
            expiry_date: ActiveValue::Set(expiry_date),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Membership::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Membership::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_member(&self, member_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Membership::delete_many()
            .filter(entity::membership::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
