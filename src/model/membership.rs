use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub id: i32,
    pub member_id: i32,
    pub gym_id: i32,
    pub join_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    /// Account of the member, present on gym-wide listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<UserSummaryDto>,
}

/// Dates accept RFC 3339 timestamps or plain `YYYY-MM-DD` dates.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipDto {
    pub member_id: Option<i32>,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub expiry_date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMembershipDto {
    pub join_date: Option<String>,
    pub expiry_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MembershipResponseDto {
    pub message: String,
    pub membership: MembershipDto,
}
