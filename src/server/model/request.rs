//! Domain models for the three approval workflows.
//!
//! Join, renewal and plan requests share the same lifecycle: created
//! `pending`, then settled exactly once by a gym owner or trainer of the
//! request's gym. Settled requests are kept with their final status.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        plan::PlanType,
        request::{JoinRequestDto, PlanRequestDto, RenewalRequestDto, RequestStatus},
    },
    server::{error::AppError, model::user::User, util::parse::parse_stored},
};

/// Approver decision on a join or renewal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Accept,
    Reject,
}

impl RequestAction {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim() {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            _ => Err(AppError::bad_request(
                "Action must be \"accept\" or \"reject\"",
            )),
        }
    }

    /// Status a pending request settles into.
    pub fn settled_status(&self) -> RequestStatus {
        match self {
            Self::Accept => RequestStatus::Accepted,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinRequest {
    pub id: i32,
    pub user_id: i32,
    pub gym_id: Option<i32>,
    pub contact_number: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JoinRequest {
    pub fn from_entity(entity: entity::join_request::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            gym_id: entity.gym_id,
            contact_number: entity.contact_number,
            status: parse_stored(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct JoinRequestWithUser {
    pub request: JoinRequest,
    pub user: User,
}

impl JoinRequestWithUser {
    pub fn into_dto(self) -> JoinRequestDto {
        JoinRequestDto {
            id: self.request.id,
            gym_id: self.request.gym_id,
            contact_number: self.request.contact_number,
            status: self.request.status,
            user: self.user.to_summary_dto(),
            created_at: self.request.created_at,
            updated_at: self.request.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenewalRequest {
    pub id: i32,
    pub membership_id: i32,
    pub member_id: i32,
    pub gym_id: i32,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RenewalRequest {
    pub fn from_entity(entity: entity::renewal_request::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            membership_id: entity.membership_id,
            member_id: entity.member_id,
            gym_id: entity.gym_id,
            status: parse_stored(&entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// A renewal request with the requesting account and current expiry.
#[derive(Debug, Clone)]
pub struct RenewalRequestWithMember {
    pub request: RenewalRequest,
    pub user: User,
    pub expiry_date: DateTime<Utc>,
}

impl RenewalRequestWithMember {
    pub fn into_dto(self) -> RenewalRequestDto {
        RenewalRequestDto {
            id: self.request.id,
            membership_id: self.request.membership_id,
            member_id: self.request.member_id,
            gym_id: self.request.gym_id,
            status: self.request.status,
            member: self.user.to_summary_dto(),
            expiry_date: self.expiry_date,
            created_at: self.request.created_at,
            updated_at: self.request.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub id: i32,
    pub member_id: i32,
    pub gym_id: i32,
    pub plan_type: PlanType,
    pub week: i32,
    pub status: RequestStatus,
    pub plan_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlanRequest {
    pub fn from_entity(entity: entity::plan_request::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            member_id: entity.member_id,
            gym_id: entity.gym_id,
            plan_type: parse_stored(&entity.plan_type)?,
            week: entity.week,
            status: parse_stored(&entity.status)?,
            plan_id: entity.plan_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PlanRequestWithMember {
    pub request: PlanRequest,
    pub user: User,
}

impl PlanRequestWithMember {
    pub fn into_dto(self) -> PlanRequestDto {
        PlanRequestDto {
            id: self.request.id,
            member_id: self.request.member_id,
            gym_id: self.request.gym_id,
            plan_type: self.request.plan_type,
            week: self.request.week,
            status: self.request.status,
            plan_id: self.request.plan_id,
            member: self.user.to_summary_dto(),
            created_at: self.request.created_at,
            updated_at: self.request.updated_at,
        }
    }
}
