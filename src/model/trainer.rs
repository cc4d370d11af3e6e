use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainerDto {
    pub id: i32,
    pub gym_id: i32,
    pub contact_number: Option<String>,
    pub user: UserSummaryDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainerDto {
    #[serde(default)]
    pub trainer_email: String,
    pub contact_number: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainerDto {
    pub contact_number: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TrainerResponseDto {
    pub message: String,
    pub trainer: TrainerDto,
}
