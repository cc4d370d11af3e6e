use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SignupDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// One of `Owner`, `Gym`, `Trainer`, `Member`
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AuthResponseDto {
    pub message: String,
    pub token: String,
    pub user: UserDto,
}
