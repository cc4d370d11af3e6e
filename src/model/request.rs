use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::{
    plan::PlanType,
    user::{UnknownVariant, UserSummaryDto},
};

/// Lifecycle state of join, renewal and plan requests.
///
/// Join and renewal requests settle as `accepted` or `rejected`; plan requests
/// settle as `fulfilled`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Fulfilled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Fulfilled => "fulfilled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "accepted" => Ok(RequestStatus::Accepted),
            "rejected" => Ok(RequestStatus::Rejected),
            "fulfilled" => Ok(RequestStatus::Fulfilled),
            other => Err(UnknownVariant::new("request status", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestDto {
    pub id: i32,
    pub gym_id: Option<i32>,
    pub contact_number: Option<String>,
    pub status: RequestStatus,
    pub user: UserSummaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJoinRequestDto {
    pub gym_id: Option<i32>,
    pub contact_number: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct JoinRequestResponseDto {
    pub message: String,
    pub request: JoinRequestDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequestDto {
    pub id: i32,
    pub member_id: i32,
    pub gym_id: i32,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub week: i32,
    pub status: RequestStatus,
    pub plan_id: Option<i32>,
    /// Account of the requesting member.
    pub member: UserSummaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreatePlanRequestDto {
    #[serde(rename = "type", default)]
    pub plan_type: String,
    pub week: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct FulfillPlanRequestDto {
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PlanRequestResponseDto {
    pub message: String,
    pub request: PlanRequestDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenewalRequestDto {
    pub id: i32,
    pub membership_id: i32,
    pub member_id: i32,
    pub gym_id: i32,
    pub status: RequestStatus,
    /// Account of the requesting member.
    pub member: UserSummaryDto,
    pub expiry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RenewalRequestResponseDto {
    pub message: String,
    pub request: RenewalRequestDto,
}
