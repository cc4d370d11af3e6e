use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_gym_table::Gym, m20260301_000006_create_member_table::Member,
    m20260301_000007_create_membership_table::Membership,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RenewalRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(RenewalRequest::Id))
                    .col(integer(RenewalRequest::MembershipId))
                    .col(integer(RenewalRequest::MemberId))
                    .col(integer(RenewalRequest::GymId))
                    .col(string(RenewalRequest::Status))
                    .col(
                        timestamp_with_time_zone(RenewalRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(RenewalRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_renewal_request_membership_id")
                            .from(RenewalRequest::Table, RenewalRequest::MembershipId)
                            .to(Membership::Table, Membership::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_renewal_request_member_id")
                            .from(RenewalRequest::Table, RenewalRequest::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_renewal_request_gym_id")
                            .from(RenewalRequest::Table, RenewalRequest::GymId)
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
            .drop_table(Table::drop().table(RenewalRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RenewalRequest {
    Table,
    Id,
    MembershipId,
    MemberId,
    GymId,
    Status,
    CreatedAt,
    UpdatedAt,
}
