use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000005_create_trainer_table::Trainer, m20260301_000006_create_member_table::Member,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plan::Table)
                    .if_not_exists()
                    .col(pk_auto(Plan::Id))
                    .col(string(Plan::PlanType))
                    .col(text(Plan::Content))
                    .col(integer_null(Plan::TrainerId))
                    .col(integer(Plan::MemberId))
                    .col(integer(Plan::Week))
                    .col(
                        timestamp_with_time_zone(Plan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Plan::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    // Trainers leave the roster without taking their plans with them
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_trainer_id")
                            .from(Plan::Table, Plan::TrainerId)
                            .to(Trainer::Table, Trainer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_member_id")
                            .from(Plan::Table, Plan::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Plan {
    Table,
    Id,
    PlanType,
    Content,
    TrainerId,
    MemberId,
    Week,
    CreatedAt,
    UpdatedAt,
}
