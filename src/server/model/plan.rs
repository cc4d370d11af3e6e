use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::plan::{CreatePlanDto, PlanDto, PlanType},
    server::{error::AppError, model::user::User, util::parse::parse_stored},
};

/// A trainer-authored workout or diet plan for one member and week.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i32,
    pub plan_type: PlanType,
    pub content: String,
    pub trainer_id: Option<i32>,
    pub member_id: i32,
    pub week: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    pub fn from_entity(entity: entity::plan::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            plan_type: parse_stored(&entity.plan_type)?,
            content: entity.content,
            trainer_id: entity.trainer_id,
            member_id: entity.member_id,
            week: entity.week,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            plan_type: self.plan_type,
            content: self.content,
            trainer_id: self.trainer_id,
            member_id: self.member_id,
            week: self.week,
            member: None,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A plan with the account of the member it was written for.
#[derive(Debug, Clone)]
pub struct PlanWithMember {
    pub plan: Plan,
    pub user: User,
}

impl PlanWithMember {
    pub fn into_dto(self) -> PlanDto {
        let member = self.user.to_summary_dto();
        PlanDto {
            member: Some(member),
            ..self.plan.into_dto()
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub plan_type: PlanType,
    pub content: String,
    pub trainer_id: Option<i32>,
    pub member_id: i32,
    pub week: i32,
}

/// Plan input from a trainer, before the authoring trainer is resolved.
#[derive(Debug, Clone)]
pub struct NewPlanInput {
    pub plan_type: PlanType,
    pub content: String,
    pub member_id: i32,
    pub week: i32,
}

impl NewPlanInput {
    pub fn from_dto(dto: CreatePlanDto) -> Result<Self, AppError> {
        let (Some(member_id), Some(week)) = (dto.member_id, dto.week) else {
            return Err(AppError::bad_request(
                "Type, content, member ID, and week are required",
            ));
        };
        if dto.plan_type.trim().is_empty() || dto.content.trim().is_empty() {
            return Err(AppError::bad_request(
                "Type, content, member ID, and week are required",
            ));
        }

        Ok(Self {
            plan_type: parse_plan_type(&dto.plan_type)?,
            content: dto.content,
            member_id,
            week: validate_week(week)?,
        })
    }
}

pub fn parse_plan_type(value: &str) -> Result<PlanType, AppError> {
    value
        .trim()
        .parse::<PlanType>()
        .map_err(|_| AppError::bad_request("Type must be \"Workout\" or \"Diet\""))
}

pub fn validate_week(week: i32) -> Result<i32, AppError> {
    if week < 1 {
        return Err(AppError::bad_request("Week must be at least 1"));
    }
    Ok(week)
}
