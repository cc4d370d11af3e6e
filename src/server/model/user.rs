//! Account domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        auth::SignupDto,
        user::{Role, UserDto, UserSummaryDto},
    },
    server::util::parse::parse_stored,
};

/// An authenticated account.
///
/// The password hash never leaves the data layer inside this model; see
/// `UserCredentials` for the login path.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: parse_stored(&entity.role)?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Name and email view embedded in gym, roster and request DTOs.
    pub fn to_summary_dto(&self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// An account together with its stored password hash.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
}

/// Validated signup input, before password hashing.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub role: String,
    pub name: String,
}

impl SignupParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
            role: dto.role.trim().to_string(),
            name: dto.name.trim().to_string(),
        }
    }
}

/// Emails are compared trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
