//! Trainer-authored plans and fulfilment of member plan requests.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::request::RequestStatus,
    server::{
        data::{member::MemberRepository, plan::PlanRepository, plan_request::PlanRequestRepository},
        error::{internal::InternalError, AppError},
        model::{
            plan::{CreatePlanParams, NewPlanInput, Plan, PlanWithMember},
            request::PlanRequestWithMember,
            user::User,
        },
        service::scope::GymScope,
        util::parse::non_blank,
    },
};

const DUPLICATE_PLAN: &str = "A plan of this type already exists for this member and week";

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a plan for a member of the trainer's gym.
    ///
    /// # Returns
    /// - `Ok(Plan)` - The created plan
    /// - `Err(AppError::BadRequest)` - Member not in the gym, or a plan of the
    ///   same type already exists for that week
    pub async fn create(&self, trainer_user: &User, input: NewPlanInput) -> Result<Plan, AppError> {
        let trainer = GymScope::new(self.db).trainer(trainer_user).await?;

        if MemberRepository::new(self.db)
            .find_in_gym(input.member_id, trainer.gym_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request("Member not found in your gym"));
        }

        let repo = PlanRepository::new(self.db);
        if repo
            .exists_for_week(input.member_id, input.week, input.plan_type)
            .await?
        {
            return Err(AppError::bad_request(DUPLICATE_PLAN));
        }

        Ok(repo
            .create(CreatePlanParams {
                plan_type: input.plan_type,
                content: input.content,
                trainer_id: Some(trainer.id),
                member_id: input.member_id,
                week: input.week,
            })
            .await
            .map_err(AppError::duplicate(DUPLICATE_PLAN))?)
    }

    /// Plans written by the calling trainer.
    pub async fn list(&self, trainer_user: &User) -> Result<Vec<PlanWithMember>, AppError> {
        let trainer = GymScope::new(self.db).trainer(trainer_user).await?;

        Ok(PlanRepository::new(self.db)
            .get_by_trainer_with_members(trainer.id)
            .await?)
    }

    /// Replaces the content of one of the trainer's plans.
    ///
    /// Absent or blank content leaves the plan unchanged.
    pub async fn update(
        &self,
        trainer_user: &User,
        id: i32,
        content: Option<String>,
    ) -> Result<Plan, AppError> {
        let plan = self.find_own(trainer_user, id).await?;

        match non_blank(content) {
            Some(content) => Ok(PlanRepository::new(self.db)
                .update_content(plan.id, content)
                .await?),
            None => Ok(plan),
        }
    }

    pub async fn delete(&self, trainer_user: &User, id: i32) -> Result<(), AppError> {
        let plan = self.find_own(trainer_user, id).await?;

        PlanRepository::new(self.db).delete(plan.id).await?;

        Ok(())
    }

    /// Pending plan requests of the trainer's gym.
    pub async fn pending_requests(
        &self,
        trainer_user: &User,
    ) -> Result<Vec<PlanRequestWithMember>, AppError> {
        let trainer = GymScope::new(self.db).trainer(trainer_user).await?;

        Ok(PlanRequestRepository::new(self.db)
            .get_pending_by_gym_with_members(trainer.gym_id)
            .await?)
    }

    /// Answers a pending plan request with a new plan.
    ///
    /// The plan is authored by the calling trainer. Creating the plan and
    /// marking the request fulfilled commit together, so a request yields
    /// exactly one plan.
    ///
    /// # Returns
    /// - `Ok(PlanRequestWithMember)` - The fulfilled request, linked to the plan
    /// - `Err(AppError::NotFound)` - No such request in the trainer's gym
    /// - `Err(AppError::BadRequest)` - Blank content, request already fulfilled,
    ///   or a plan already exists for the requested week and type
    pub async fn fulfill_request(
        &self,
        trainer_user: &User,
        request_id: i32,
        content: String,
    ) -> Result<PlanRequestWithMember, AppError> {
        let content = non_blank(Some(content))
            .ok_or_else(|| AppError::bad_request("Content is required"))?;
        let trainer = GymScope::new(self.db).trainer(trainer_user).await?;

        let txn = self.db.begin().await?;
        let requests = PlanRequestRepository::new(&txn);
        let plans = PlanRepository::new(&txn);

        let request = requests
            .find_by_id(request_id)
            .await?
            .filter(|request| request.gym_id == trainer.gym_id)
            .ok_or_else(|| AppError::not_found("Plan request not found"))?;

        if request.status != RequestStatus::Pending {
            return Err(AppError::bad_request("Request already processed"));
        }
        if plans
            .exists_for_week(request.member_id, request.week, request.plan_type)
            .await?
        {
            return Err(AppError::bad_request(DUPLICATE_PLAN));
        }

        let plan = plans
            .create(CreatePlanParams {
                plan_type: request.plan_type,
                content,
                trainer_id: Some(trainer.id),
                member_id: request.member_id,
                week: request.week,
            })
            .await
            .map_err(AppError::duplicate(DUPLICATE_PLAN))?;

        if !requests.fulfill(request.id, plan.id).await? {
            return Err(AppError::bad_request("Request already processed"));
        }

        let fulfilled = requests
            .find_with_member(request.id)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Plan request",
                id: request.id,
            })?;
        txn.commit().await?;

        tracing::debug!(
            "Plan request {} fulfilled by trainer {} with plan {}",
            request.id,
            trainer.id,
            plan.id
        );

        Ok(fulfilled)
    }

    async fn find_own(&self, trainer_user: &User, id: i32) -> Result<Plan, AppError> {
        let trainer = GymScope::new(self.db).trainer(trainer_user).await?;

        PlanRepository::new(self.db)
            .find_by_trainer(id, trainer.id)
            .await?
            .ok_or_else(|| AppError::not_found("Plan not found or not yours"))
    }
}
