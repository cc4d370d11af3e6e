use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::user::{UnknownVariant, UserSummaryDto};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub enum PlanType {
    Workout,
    Diet,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Workout => "Workout",
            PlanType::Diet => "Diet",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Workout" => Ok(PlanType::Workout),
            "Diet" => Ok(PlanType::Diet),
            other => Err(UnknownVariant::new("plan type", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub content: String,
    pub trainer_id: Option<i32>,
    pub member_id: i32,
    pub week: i32,
    /// Account of the member the plan was written for, present on trainer listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<UserSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanDto {
    #[serde(rename = "type", default)]
    pub plan_type: String,
    #[serde(default)]
    pub content: String,
    pub member_id: Option<i32>,
    pub week: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdatePlanDto {
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PlanResponseDto {
    pub message: String,
    pub plan: PlanDto,
}
