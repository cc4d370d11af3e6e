//! Gym domain models and parameters.
//!
//! A gym row is stored with its ordered photo list and membership plan
//! catalog in side tables; the domain model carries them inline.

use chrono::{DateTime, Utc};

use crate::{
    model::gym::{
        CreateGymDto, GymDto, GymProfileDto, MembershipPlanDto, OwnerDetailsDto, UpdateGymDto,
    },
    server::{
        model::{member::MemberWithUser, trainer::TrainerWithUser, user::User},
        util::parse::non_blank,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct MembershipPlan {
    pub plan_name: String,
    pub price: f64,
    pub duration: i32,
}

impl MembershipPlan {
    pub fn from_entity(entity: entity::membership_plan::Model) -> Self {
        Self {
            plan_name: entity.plan_name,
            price: entity.price,
            duration: entity.duration,
        }
    }

    pub fn from_dto(dto: MembershipPlanDto) -> Self {
        Self {
            plan_name: dto.plan_name,
            price: dto.price,
            duration: dto.duration,
        }
    }

    pub fn into_dto(self) -> MembershipPlanDto {
        MembershipPlanDto {
            plan_name: self.plan_name,
            price: self.price,
            duration: self.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gym {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub owner_id: i32,
    pub owner_full_name: Option<String>,
    pub owner_phone: Option<String>,
    pub photos: Vec<String>,
    pub membership_plans: Vec<MembershipPlan>,
    pub created_at: DateTime<Utc>,
}

impl Gym {
    /// Assembles the domain model from the gym row and its side tables.
    ///
    /// `photos` must already be ordered by position.
    pub fn from_entity(
        entity: entity::gym::Model,
        photos: Vec<entity::gym_photo::Model>,
        plans: Vec<entity::membership_plan::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            owner_id: entity.owner_id,
            owner_full_name: entity.owner_full_name,
            owner_phone: entity.owner_phone,
            photos: photos.into_iter().map(|p| p.url).collect(),
            membership_plans: plans.into_iter().map(MembershipPlan::from_entity).collect(),
            created_at: entity.created_at,
        }
    }

    fn owner_details_dto(&self) -> Option<OwnerDetailsDto> {
        if self.owner_full_name.is_none() && self.owner_phone.is_none() {
            return None;
        }

        Some(OwnerDetailsDto {
            full_name: self.owner_full_name.clone().unwrap_or_default(),
            phone: self.owner_phone.clone().unwrap_or_default(),
        })
    }
}

/// A gym together with its owner account and roster.
#[derive(Debug, Clone)]
pub struct GymDetail {
    pub gym: Gym,
    pub owner: Option<User>,
    pub trainers: Vec<TrainerWithUser>,
    pub members: Vec<MemberWithUser>,
}

impl GymDetail {
    pub fn into_dto(self) -> GymDto {
        let owner_details = self.gym.owner_details_dto();

        GymDto {
            id: self.gym.id,
            name: self.gym.name,
            address: self.gym.address,
            photos: self.gym.photos,
            membership_details: self
                .gym
                .membership_plans
                .into_iter()
                .map(MembershipPlan::into_dto)
                .collect(),
            owner_details,
            owner: self.owner.as_ref().map(User::to_summary_dto),
            trainers: self.trainers.iter().map(|t| t.user.to_summary_dto()).collect(),
            members: self.members.iter().map(|m| m.user.to_summary_dto()).collect(),
            created_at: self.gym.created_at,
        }
    }

    /// Public profile view: no member list, optional pending-request flag.
    pub fn into_profile_dto(self, has_pending_request: Option<bool>) -> GymProfileDto {
        let owner_details = self.gym.owner_details_dto();

        GymProfileDto {
            id: self.gym.id,
            name: self.gym.name,
            address: self.gym.address,
            photos: self.gym.photos,
            membership_details: self
                .gym
                .membership_plans
                .into_iter()
                .map(MembershipPlan::into_dto)
                .collect(),
            owner_details,
            owner: self.owner.as_ref().map(User::to_summary_dto),
            trainers: self.trainers.iter().map(|t| t.user.to_summary_dto()).collect(),
            has_pending_request,
        }
    }
}

/// Directory entry: a gym profile plus whether the caller has a pending join
/// request for it.
#[derive(Debug, Clone)]
pub struct GymDirectoryEntry {
    pub detail: GymDetail,
    pub has_pending_request: bool,
}

impl GymDirectoryEntry {
    pub fn into_dto(self) -> GymProfileDto {
        self.detail.into_profile_dto(Some(self.has_pending_request))
    }
}

/// Parameters for creating a gym.
#[derive(Debug, Clone)]
pub struct CreateGymParams {
    pub owner_id: i32,
    pub name: String,
    pub address: String,
    pub owner_full_name: Option<String>,
    pub owner_phone: Option<String>,
    pub photos: Vec<String>,
    pub membership_plans: Vec<MembershipPlan>,
}

/// Gym creation input before the owning account is resolved.
#[derive(Debug, Clone)]
pub struct NewGymInput {
    pub name: String,
    pub address: String,
    pub owner_full_name: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_email: Option<String>,
    pub photos: Vec<String>,
    pub membership_plans: Vec<MembershipPlan>,
}

impl NewGymInput {
    pub fn from_dto(dto: CreateGymDto) -> Self {
        let (owner_full_name, owner_phone) = match dto.owner_details {
            Some(details) => (
                non_blank(Some(details.full_name)),
                non_blank(Some(details.phone)),
            ),
            None => (None, None),
        };

        Self {
            name: dto.name.trim().to_string(),
            address: dto.address.trim().to_string(),
            owner_full_name,
            owner_phone,
            owner_email: non_blank(dto.owner_email),
            photos: clean_photos(dto.photos),
            membership_plans: dto
                .membership_details
                .into_iter()
                .map(MembershipPlan::from_dto)
                .collect(),
        }
    }

    pub fn into_params(self, owner_id: i32) -> CreateGymParams {
        CreateGymParams {
            owner_id,
            name: self.name,
            address: self.address,
            owner_full_name: self.owner_full_name,
            owner_phone: self.owner_phone,
            photos: self.photos,
            membership_plans: self.membership_plans,
        }
    }
}

/// Partial gym update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGymParams {
    pub name: Option<String>,
    pub address: Option<String>,
    pub owner_full_name: Option<String>,
    pub owner_phone: Option<String>,
    pub photos: Option<Vec<String>>,
    pub membership_plans: Option<Vec<MembershipPlan>>,
}

impl UpdateGymParams {
    pub fn from_dto(dto: UpdateGymDto) -> Self {
        let (owner_full_name, owner_phone) = match dto.owner_details {
            Some(details) => (
                non_blank(Some(details.full_name)),
                non_blank(Some(details.phone)),
            ),
            None => (None, None),
        };

        Self {
            name: non_blank(dto.name),
            address: non_blank(dto.address),
            owner_full_name,
            owner_phone,
            photos: dto.photos.map(clean_photos),
            membership_plans: dto
                .membership_details
                .map(|plans| plans.into_iter().map(MembershipPlan::from_dto).collect()),
        }
    }
}

fn clean_photos(photos: Vec<String>) -> Vec<String> {
    photos
        .into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}
