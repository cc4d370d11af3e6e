use chrono::{DateTime, Utc};

use crate::{model::member::MemberDto, server::model::user::User};

/// A member roster row.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub user_id: i32,
    pub gym_id: i32,
    pub contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            gym_id: entity.gym_id,
            contact_number: entity.contact_number,
            created_at: entity.created_at,
        }
    }
}

/// A member roster row with its account.
#[derive(Debug, Clone)]
pub struct MemberWithUser {
    pub member: Member,
    pub user: User,
}

impl MemberWithUser {
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.member.id,
            gym_id: self.member.gym_id,
            contact_number: self.member.contact_number,
            user: self.user.to_summary_dto(),
            created_at: self.member.created_at,
        }
    }
}

/// Parameters for putting an account on a gym's member roster.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub user_id: i32,
    pub gym_id: i32,
    pub contact_number: Option<String>,
}
