//! Plan factory for trainer-authored workout and diet plans.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating plans for an existing member.
///
/// # Example
///
/// ```rust,ignore
/// let plan = PlanFactory::new(&db, member.id)
///     .trainer_id(Some(trainer.id))
///     .plan_type("Diet")
///     .week(2)
///     .build()
///     .await?;
/// ```
pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    trainer_id: Option<i32>,
    plan_type: String,
    content: String,
    week: i32,
}

impl<'a> PlanFactory<'a> {
    /// Creates a new PlanFactory.
    ///
    /// Defaults:
    /// - trainer_id: none
    /// - plan_type: `"Workout"`
    /// - content: `"Plan content {id}"`
    /// - week: 1
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            trainer_id: None,
            plan_type: "Workout".to_string(),
            content: format!("Plan content {}", id),
            week: 1,
        }
    }

    pub fn trainer_id(mut self, trainer_id: Option<i32>) -> Self {
        self.trainer_id = trainer_id;
        self
    }

    pub fn plan_type(mut self, plan_type: impl Into<String>) -> Self {
        self.plan_type = plan_type.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn week(mut self, week: i32) -> Self {
        self.week = week;
        self
    }

    pub async fn build(self) -> Result<entity::plan::Model, DbErr> {
        let now = Utc::now();
        entity::plan::ActiveModel {
            id: ActiveValue::NotSet,
            plan_type: ActiveValue::Set(self.plan_type),
            content: ActiveValue::Set(self.content),
            trainer_id: ActiveValue::Set(self.trainer_id),
            member_id: ActiveValue::Set(self.member_id),
            week: ActiveValue::Set(self.week),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a week 1 workout plan authored by `trainer_id` for `member_id`.
pub async fn create_plan(
    db: &DatabaseConnection,
    trainer_id: i32,
    member_id: i32,
) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db, member_id)
        .trainer_id(Some(trainer_id))
        .build()
        .await
}
