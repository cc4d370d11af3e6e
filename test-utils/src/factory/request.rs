//! Factories for join, plan and renewal requests.
//!
//! Requests default to the `pending` status; use the `*_with_status`
//! variants to seed settled requests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pending join request from `user_id` to `gym_id`.
pub async fn create_join_request(
    db: &DatabaseConnection,
    user_id: i32,
    gym_id: i32,
) -> Result<entity::join_request::Model, DbErr> {
    create_join_request_with_status(db, user_id, gym_id, "pending").await
}

pub async fn create_join_request_with_status(
    db: &DatabaseConnection,
    user_id: i32,
    gym_id: i32,
    status: &str,
) -> Result<entity::join_request::Model, DbErr> {
    let now = Utc::now();
    entity::join_request::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        gym_id: ActiveValue::Set(Some(gym_id)),
        contact_number: ActiveValue::Set(Some("555-0101".to_string())),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Creates a pending plan request for `member` in its gym.
pub async fn create_plan_request(
    db: &DatabaseConnection,
    member: &entity::member::Model,
    plan_type: &str,
    week: i32,
) -> Result<entity::plan_request::Model, DbErr> {
    let now = Utc::now();
    entity::plan_request::ActiveModel {
        id: ActiveValue::NotSet,
        member_id: ActiveValue::Set(member.id),
        gym_id: ActiveValue::Set(member.gym_id),
        plan_type: ActiveValue::Set(plan_type.to_string()),
        week: ActiveValue::Set(week),
        status: ActiveValue::Set("pending".to_string()),
        plan_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Creates a pending renewal request for `membership`.
pub async fn create_renewal_request(
    db: &DatabaseConnection,
    membership: &entity::membership::Model,
) -> Result<entity::renewal_request::Model, DbErr> {
    create_renewal_request_with_status(db, membership, "pending").await
}

pub async fn create_renewal_request_with_status(
    db: &DatabaseConnection,
    membership: &entity::membership::Model,
    status: &str,
) -> Result<entity::renewal_request::Model, DbErr> {
    let now = Utc::now();
    entity::renewal_request::ActiveModel {
        id: ActiveValue::NotSet,
        membership_id: ActiveValue::Set(membership.id),
        member_id: ActiveValue::Set(membership.member_id),
        gym_id: ActiveValue::Set(membership.gym_id),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
