use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::plan::PlanType,
    server::{
        data::member::MemberRepository,
        model::plan::{CreatePlanParams, Plan, PlanWithMember},
    },
};

pub struct PlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, DbErr> {
        let now = Utc::now();
        let entity = entity::plan::ActiveModel {
            plan_type: ActiveValue::Set(params.plan_type.as_str().to_string()),
            content: ActiveValue::Set(params.content),
            trainer_id: ActiveValue::Set(params.trainer_id),
            member_id: ActiveValue::Set(params.member_id),
            week: ActiveValue::Set(params.week),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Plan::from_entity(entity)
    }

    /// Finds a plan by id, but only if authored by the given trainer.
    pub async fn find_by_trainer(&self, id: i32, trainer_id: i32) -> Result<Option<Plan>, DbErr> {
        entity::prelude::Plan::find_by_id(id)
            .filter(entity::plan::Column::TrainerId.eq(trainer_id))
            .one(self.db)
            .await?
            .map(Plan::from_entity)
            .transpose()
    }

    /// Checks whether a member already has a plan of this type for the week.
    pub async fn exists_for_week(
        &self,
        member_id: i32,
        week: i32,
        plan_type: PlanType,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Plan::find()
            .filter(entity::plan::Column::MemberId.eq(member_id))
            .filter(entity::plan::Column::Week.eq(week))
            .filter(entity::plan::Column::PlanType.eq(plan_type.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the plans authored by a trainer with the member's account,
    /// ordered by week.
    pub async fn get_by_trainer_with_members(
        &self,
        trainer_id: i32,
    ) -> Result<Vec<PlanWithMember>, DbErr> {
        let plans = entity::prelude::Plan::find()
            .filter(entity::plan::Column::TrainerId.eq(trainer_id))
            .order_by_asc(entity::plan::Column::Week)
            .order_by_asc(entity::plan::Column::Id)
            .all(self.db)
            .await?;

        let member_ids: Vec<i32> = plans.iter().map(|p| p.member_id).collect();
        let users = MemberRepository::new(self.db)
            .get_users_by_member_ids(&member_ids)
            .await?;

        plans
            .into_iter()
            .map(|plan| {
                let user = users.get(&plan.member_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Member account of plan {} not found", plan.id))
                })?;

                Ok(PlanWithMember {
                    plan: Plan::from_entity(plan)?,
                    user,
                })
            })
            .collect()
    }

    /// Gets a member's plans ordered by week.
    pub async fn get_by_member(&self, member_id: i32) -> Result<Vec<Plan>, DbErr> {
        entity::prelude::Plan::find()
            .filter(entity::plan::Column::MemberId.eq(member_id))
            .order_by_asc(entity::plan::Column::Week)
            .order_by_asc(entity::plan::Column::PlanType)
            .all(self.db)
            .await?
            .into_iter()
            .map(Plan::from_entity)
            .collect()
    }

    pub async fn update_content(&self, id: i32, content: String) -> Result<Plan, DbErr> {
        let entity = entity::plan::ActiveModel {
            id: ActiveValue::Unchanged(id),
            content: ActiveValue::Set(content),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Plan::from_entity(entity)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Plan::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn delete_by_member(&self, member_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Plan::delete_many()
            .filter(entity::plan::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Clears the author of every plan written by a trainer who leaves the
    /// roster. The plans themselves stay.
    pub async fn detach_trainer(&self, trainer_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Plan::update_many()
            .col_expr(
                entity::plan::Column::TrainerId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::plan::Column::TrainerId.eq(trainer_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
