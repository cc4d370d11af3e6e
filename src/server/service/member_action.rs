//! Self-service operations of gym members, plus the trainer's view of their gym.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        gym::GymRepository, membership::MembershipRepository, plan::PlanRepository,
        plan_request::PlanRequestRepository, renewal_request::RenewalRequestRepository,
        trainer::TrainerRepository,
    },
    error::AppError,
    model::{
        gym::GymDetail,
        membership::Membership,
        plan::{parse_plan_type, validate_week, Plan},
        request::{PlanRequestWithMember, RenewalRequestWithMember},
        user::User,
    },
    service::{gym::GymService, scope::GymScope},
};

const DUPLICATE_PLAN_REQUEST: &str = "You already have a pending request for this plan";
const DUPLICATE_RENEWAL_REQUEST: &str = "A renewal request is already pending";

pub struct MemberActionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberActionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile of the gym the calling member belongs to.
    pub async fn gym_profile(&self, member_user: &User) -> Result<GymDetail, AppError> {
        let member = GymScope::new(self.db).member(member_user).await?;

        self.gym_detail(member.gym_id).await
    }

    /// Profile of the gym the calling trainer works at.
    pub async fn trainer_gym(&self, trainer_user: &User) -> Result<GymDetail, AppError> {
        let trainer = GymScope::new(self.db).trainer(trainer_user).await?;

        self.gym_detail(trainer.gym_id).await
    }

    /// Asks the gym's trainers for a plan of the given type and week.
    ///
    /// # Returns
    /// - `Ok(PlanRequestWithMember)` - The pending request
    /// - `Err(AppError::BadRequest)` - Invalid type or week, caller not on a
    ///   roster, no trainers in the gym, or the plan already exists or was
    ///   already requested
    pub async fn request_plan(
        &self,
        member_user: &User,
        plan_type: &str,
        week: Option<i32>,
    ) -> Result<PlanRequestWithMember, AppError> {
        let Some(week) = week.filter(|_| !plan_type.trim().is_empty()) else {
            return Err(AppError::bad_request("Type and week are required"));
        };
        let plan_type = parse_plan_type(plan_type)?;
        let week = validate_week(week)?;

        let member = GymScope::new(self.db).member(member_user).await?;

        if TrainerRepository::new(self.db)
            .count_by_gym(member.gym_id)
            .await?
            == 0
        {
            return Err(AppError::bad_request("No trainers available in your gym"));
        }

        if PlanRepository::new(self.db)
            .exists_for_week(member.id, week, plan_type)
            .await?
        {
            return Err(AppError::bad_request(
                "A plan of this type already exists for this week",
            ));
        }

        let requests = PlanRequestRepository::new(self.db);
        if requests
            .find_pending(member.id, plan_type, week)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request(DUPLICATE_PLAN_REQUEST));
        }

        let request = requests
            .create(&member, plan_type, week)
            .await
            .map_err(AppError::duplicate(DUPLICATE_PLAN_REQUEST))?;

        tracing::debug!(
            "Member {} requested a {} plan for week {}",
            member.id,
            plan_type,
            week
        );

        Ok(PlanRequestWithMember {
            request,
            user: member_user.clone(),
        })
    }

    /// Plans written for the calling member, ordered by week.
    pub async fn plans(&self, member_user: &User) -> Result<Vec<Plan>, AppError> {
        let member = GymScope::new(self.db).member(member_user).await?;

        Ok(PlanRepository::new(self.db).get_by_member(member.id).await?)
    }

    pub async fn membership(&self, member_user: &User) -> Result<Membership, AppError> {
        let member = GymScope::new(self.db).member(member_user).await?;

        MembershipRepository::new(self.db)
            .find_by_member_id(member.id)
            .await?
            .ok_or_else(|| AppError::not_found("No membership found"))
    }

    /// Asks the gym to extend the caller's membership.
    ///
    /// # Returns
    /// - `Ok(RenewalRequestWithMember)` - The pending request
    /// - `Err(AppError::NotFound)` - The caller holds no membership
    /// - `Err(AppError::BadRequest)` - A renewal is already pending
    pub async fn request_renewal(
        &self,
        member_user: &User,
    ) -> Result<RenewalRequestWithMember, AppError> {
        let membership = self.membership(member_user).await?;

        let repo = RenewalRequestRepository::new(self.db);
        if repo
            .find_pending_by_membership(membership.id)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request(DUPLICATE_RENEWAL_REQUEST));
        }

        let request = repo
            .create(&membership)
            .await
            .map_err(AppError::duplicate(DUPLICATE_RENEWAL_REQUEST))?;

        tracing::debug!("Membership {} renewal requested", membership.id);

        Ok(RenewalRequestWithMember {
            request,
            user: member_user.clone(),
            expiry_date: membership.expiry_date,
        })
    }

    async fn gym_detail(&self, gym_id: i32) -> Result<GymDetail, AppError> {
        let gym = GymRepository::new(self.db)
            .find_by_id(gym_id)
            .await?
            .ok_or_else(|| AppError::not_found("Gym not found"))?;

        GymService::new(self.db).detail(gym).await
    }
}
