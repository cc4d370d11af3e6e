use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_gym_table::Gym;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MembershipPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(MembershipPlan::Id))
                    .col(integer(MembershipPlan::GymId))
                    .col(string(MembershipPlan::PlanName))
                    .col(double(MembershipPlan::Price))
                    .col(integer(MembershipPlan::Duration))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_plan_gym_id")
                            .from(MembershipPlan::Table, MembershipPlan::GymId)
                            .to(Gym::Table, Gym::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MembershipPlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MembershipPlan {
    Table,
    Id,
    GymId,
    PlanName,
    Price,
    Duration,
}
