use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::{plan::PlanType, request::RequestStatus},
    server::{
        data::member::MemberRepository,
        model::{
            member::Member,
            request::{PlanRequest, PlanRequestWithMember},
        },
    },
};

pub struct PlanRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        member: &Member,
        plan_type: PlanType,
        week: i32,
    ) -> Result<PlanRequest, DbErr> {
        let now = Utc::now();
        let entity = entity::plan_request::ActiveModel {
            member_id: ActiveValue::Set(member.id),
            gym_id: ActiveValue::Set(member.gym_id),
            plan_type: ActiveValue::Set(plan_type.as_str().to_string()),
            week: ActiveValue::Set(week),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            plan_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PlanRequest::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PlanRequest>, DbErr> {
        entity::prelude::PlanRequest::find_by_id(id)
            .one(self.db)
            .await?
            .map(PlanRequest::from_entity)
            .transpose()
    }

    /// Finds a request by id with the member account.
    pub async fn find_with_member(
        &self,
        id: i32,
    ) -> Result<Option<PlanRequestWithMember>, DbErr> {
        let Some(request) = entity::prelude::PlanRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let user = MemberRepository::new(self.db)
            .get_users_by_member_ids(&[request.member_id])
            .await?
            .remove(&request.member_id)
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Member account of plan request {} not found",
                    request.id
                ))
            })?;

        Ok(Some(PlanRequestWithMember {
            request: PlanRequest::from_entity(request)?,
            user,
        }))
    }

    /// Finds a member's pending request for the same plan type and week.
    pub async fn find_pending(
        &self,
        member_id: i32,
        plan_type: PlanType,
        week: i32,
    ) -> Result<Option<PlanRequest>, DbErr> {
        entity::prelude::PlanRequest::find()
            .filter(entity::plan_request::Column::MemberId.eq(member_id))
            .filter(entity::plan_request::Column::PlanType.eq(plan_type.as_str()))
            .filter(entity::plan_request::Column::Week.eq(week))
            .filter(entity::plan_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .one(self.db)
            .await?
            .map(PlanRequest::from_entity)
            .transpose()
    }

    /// Gets a gym's pending plan requests with the member accounts, oldest first.
    pub async fn get_pending_by_gym_with_members(
        &self,
        gym_id: i32,
    ) -> Result<Vec<PlanRequestWithMember>, DbErr> {
        let requests = entity::prelude::PlanRequest::find()
            .filter(entity::plan_request::Column::GymId.eq(gym_id))
            .filter(entity::plan_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .order_by_asc(entity::plan_request::Column::CreatedAt)
            .order_by_asc(entity::plan_request::Column::Id)
            .all(self.db)
            .await?;

        let member_ids: Vec<i32> = requests.iter().map(|r| r.member_id).collect();
        let users = MemberRepository::new(self.db)
            .get_users_by_member_ids(&member_ids)
            .await?;

        requests
            .into_iter()
            .map(|request| {
                let user = users.get(&request.member_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Member account of plan request {} not found",
                        request.id
                    ))
                })?;

                Ok(PlanRequestWithMember {
                    request: PlanRequest::from_entity(request)?,
                    user,
                })
            })
            .collect()
    }

    /// Gets every plan request of a member, newest first.
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<PlanRequest>, DbErr> {
        entity::prelude::PlanRequest::find()
            .filter(entity::plan_request::Column::MemberId.eq(member_id))
            .order_by_desc(entity::plan_request::Column::CreatedAt)
            .order_by_desc(entity::plan_request::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PlanRequest::from_entity)
            .collect()
    }

    /// Marks a pending request fulfilled by the given plan.
    ///
    /// # Returns
    /// - `Ok(true)` - The request was pending and is now fulfilled
    /// - `Ok(false)` - The request does not exist or was already fulfilled
    pub async fn fulfill(&self, id: i32, plan_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlanRequest::update_many()
            .col_expr(
                entity::plan_request::Column::Status,
                Expr::value(RequestStatus::Fulfilled.as_str()),
            )
            .col_expr(entity::plan_request::Column::PlanId, Expr::value(plan_id))
            .col_expr(entity::plan_request::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::plan_request::Column::Id.eq(id))
            .filter(entity::plan_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn delete_by_member(&self, member_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanRequest::delete_many()
            .filter(entity::plan_request::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
