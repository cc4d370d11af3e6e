use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000002_create_gym_table::Gym, m20260301_000006_create_member_table::Member};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Membership::Table)
                    .if_not_exists()
                    .col(pk_auto(Membership::Id))
                    .col(integer_uniq(Membership::MemberId))
                    .col(integer(Membership::GymId))
                    .col(timestamp_with_time_zone(Membership::JoinDate))
                    .col(timestamp_with_time_zone(Membership::ExpiryDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_member_id")
                            .from(Membership::Table, Membership::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_gym_id")
                            .from(Membership::Table, Membership::GymId)
                            .to(Gym::Table, Gym::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Membership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Membership {
    Table,
    Id,
    MemberId,
    GymId,
    JoinDate,
    ExpiryDate,
}
