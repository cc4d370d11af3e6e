use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::{
    member::{CreateMemberParams, Member, MemberWithUser},
    user::User,
};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Puts an account on a gym's member roster.
    ///
    /// # Returns
    /// - `Ok(Member)` - The created roster row
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   account is already on a roster
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            gym_id: ActiveValue::Set(params.gym_id),
            contact_number: ActiveValue::Set(params.contact_number),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Finds the roster row of a member account.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Member>, DbErr> {
        Ok(entity::prelude::Member::find()
            .filter(entity::member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Member::from_entity))
    }

    /// Finds a member by roster id, but only within the given gym.
    pub async fn find_in_gym(&self, id: i32, gym_id: i32) -> Result<Option<Member>, DbErr> {
        Ok(entity::prelude::Member::find_by_id(id)
            .filter(entity::member::Column::GymId.eq(gym_id))
            .one(self.db)
            .await?
            .map(Member::from_entity))
    }

    /// Finds the roster row of `user_id` if it belongs to the given gym.
    pub async fn find_by_user_in_gym(
        &self,
        user_id: i32,
        gym_id: i32,
    ) -> Result<Option<Member>, DbErr> {
        Ok(entity::prelude::Member::find()
            .filter(entity::member::Column::UserId.eq(user_id))
            .filter(entity::member::Column::GymId.eq(gym_id))
            .one(self.db)
            .await?
            .map(Member::from_entity))
    }

    /// Gets a gym's members with their accounts, oldest first.
    pub async fn get_by_gym_with_users(&self, gym_id: i32) -> Result<Vec<MemberWithUser>, DbErr> {
        let rows = entity::prelude::Member::find()
            .filter(entity::member::Column::GymId.eq(gym_id))
            .order_by_asc(entity::member::Column::CreatedAt)
            .order_by_asc(entity::member::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter().map(with_user).collect()
    }

    /// Loads the accounts behind a set of member roster ids, keyed by member id.
    pub async fn get_users_by_member_ids(
        &self,
        member_ids: &[i32],
    ) -> Result<HashMap<i32, User>, DbErr> {
        if member_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(member_ids.iter().copied()))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|row| with_user(row).map(|m| (m.member.id, m.user)))
            .collect()
    }

    pub async fn count_by_gym(&self, gym_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::GymId.eq(gym_id))
            .count(self.db)
            .await
    }

    pub async fn update_contact_number(
        &self,
        id: i32,
        contact_number: Option<String>,
    ) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            id: ActiveValue::Unchanged(id),
            contact_number: ActiveValue::Set(contact_number),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Member::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

fn with_user(
    (member, user): (entity::member::Model, Option<entity::user::Model>),
) -> Result<MemberWithUser, DbErr> {
    let user = user.ok_or_else(|| {
        DbErr::RecordNotFound(format!("Account of member {} not found", member.id))
    })?;

    Ok(MemberWithUser {
        member: Member::from_entity(member),
        user: User::from_entity(user)?,
    })
}
