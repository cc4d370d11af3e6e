use chrono::{DateTime, Duration, Utc};

use crate::{
    model::membership::{CreateMembershipDto, MembershipDto, UpdateMembershipDto},
    server::{
        error::AppError,
        model::user::User,
        util::parse::{non_blank, parse_date},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub id: i32,
    pub member_id: i32,
    pub gym_id: i32,
    pub join_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl Membership {
    pub fn from_entity(entity: entity::membership::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            gym_id: entity.gym_id,
            join_date: entity.join_date,
            expiry_date: entity.expiry_date,
        }
    }

    /// Expiry date after extending the current one by `extension`.
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - The moved expiry date
    /// - `Err(AppError::BadRequest)` - The result is outside the supported date range
    pub fn renewed_expiry(&self, extension: Duration) -> Result<DateTime<Utc>, AppError> {
        self.expiry_date
            .checked_add_signed(extension)
            .ok_or_else(|| AppError::bad_request("Membership expiry cannot be extended further"))
    }

    pub fn into_dto(self) -> MembershipDto {
        MembershipDto {
            id: self.id,
            member_id: self.member_id,
            gym_id: self.gym_id,
            join_date: self.join_date,
            expiry_date: self.expiry_date,
            member: None,
        }
    }
}

/// A membership with the account of the member holding it.
#[derive(Debug, Clone)]
pub struct MembershipWithMember {
    pub membership: Membership,
    pub user: User,
}

impl MembershipWithMember {
    pub fn into_dto(self) -> MembershipDto {
        let member = self.user.to_summary_dto();
        MembershipDto {
            member: Some(member),
            ..self.membership.into_dto()
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMembershipParams {
    pub member_id: i32,
    pub join_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl CreateMembershipParams {
    /// Validates presence and format of the fields and the date ordering.
    pub fn from_dto(dto: CreateMembershipDto) -> Result<Self, AppError> {
        let (Some(member_id), false, false) = (
            dto.member_id,
            dto.join_date.trim().is_empty(),
            dto.expiry_date.trim().is_empty(),
        ) else {
            return Err(AppError::bad_request(
                "Member ID, join date, and expiry date are required",
            ));
        };

        let join_date = parse_date(&dto.join_date, "joinDate")?;
        let expiry_date = parse_date(&dto.expiry_date, "expiryDate")?;
        ensure_expiry_after_join(join_date, expiry_date)?;

        Ok(Self {
            member_id,
            join_date,
            expiry_date,
        })
    }
}

/// Partial membership update; absent dates keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateMembershipParams {
    pub join_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl UpdateMembershipParams {
    pub fn from_dto(dto: UpdateMembershipDto) -> Result<Self, AppError> {
        Ok(Self {
            join_date: non_blank(dto.join_date)
                .map(|d| parse_date(&d, "joinDate"))
                .transpose()?,
            expiry_date: non_blank(dto.expiry_date)
                .map(|d| parse_date(&d, "expiryDate"))
                .transpose()?,
        })
    }
}

pub fn ensure_expiry_after_join(
    join_date: DateTime<Utc>,
    expiry_date: DateTime<Utc>,
) -> Result<(), AppError> {
    if expiry_date <= join_date {
        return Err(AppError::bad_request("Expiry date must be after join date"));
    }
    Ok(())
}
