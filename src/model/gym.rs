use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

/// Entry of a gym's membership plan catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlanDto {
    pub plan_name: String,
    pub price: f64,
    /// Length of the plan in days.
    pub duration: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDetailsDto {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
}

/// Full gym view including its roster.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub photos: Vec<String>,
    pub membership_details: Vec<MembershipPlanDto>,
    pub owner_details: Option<OwnerDetailsDto>,
    pub owner: Option<UserSummaryDto>,
    pub trainers: Vec<UserSummaryDto>,
    pub members: Vec<UserSummaryDto>,
    pub created_at: DateTime<Utc>,
}

/// Public gym view used by the directory and the gym profile endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymProfileDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub photos: Vec<String>,
    pub membership_details: Vec<MembershipPlanDto>,
    pub owner_details: Option<OwnerDetailsDto>,
    pub owner: Option<UserSummaryDto>,
    pub trainers: Vec<UserSummaryDto>,
    /// Set for directory listings only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_pending_request: Option<bool>,
}

/// Body of `POST /api/gyms` (Owner) and `POST /api/gyms/my-gym` (Gym).
///
/// `owner_email` is ignored on the self-service path.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGymDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub membership_details: Vec<MembershipPlanDto>,
    pub owner_details: Option<OwnerDetailsDto>,
    pub owner_email: Option<String>,
}

/// Partial gym update. Blank or absent fields keep their prior values while a
/// supplied list replaces the stored list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGymDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub photos: Option<Vec<String>>,
    pub membership_details: Option<Vec<MembershipPlanDto>>,
    pub owner_details: Option<OwnerDetailsDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct GymResponseDto {
    pub message: String,
    pub gym: GymDto,
}
