use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_gym_table::Gym, m20260301_000006_create_member_table::Member,
    m20260301_000008_create_plan_table::Plan,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanRequest::Id))
                    .col(integer(PlanRequest::MemberId))
                    .col(integer(PlanRequest::GymId))
                    .col(string(PlanRequest::PlanType))
                    .col(integer(PlanRequest::Week))
                    .col(string(PlanRequest::Status))
                    .col(integer_null(PlanRequest::PlanId))
                    .col(
                        timestamp_with_time_zone(PlanRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PlanRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_request_member_id")
                            .from(PlanRequest::Table, PlanRequest::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_request_gym_id")
                            .from(PlanRequest::Table, PlanRequest::GymId)
                            .to(Gym::Table, Gym::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_request_plan_id")
                            .from(PlanRequest::Table, PlanRequest::PlanId)
                            .to(Plan::Table, Plan::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlanRequest {
    Table,
    Id,
    MemberId,
    GymId,
    PlanType,
    Week,
    Status,
    PlanId,
    CreatedAt,
    UpdatedAt,
}
