use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_user_table::User, m20260301_000002_create_gym_table::Gym};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JoinRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(JoinRequest::Id))
                    .col(integer(JoinRequest::UserId))
                    .col(integer_null(JoinRequest::GymId))
                    .col(string_null(JoinRequest::ContactNumber))
                    .col(string(JoinRequest::Status))
                    .col(
                        timestamp_with_time_zone(JoinRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(JoinRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_request_user_id")
                            .from(JoinRequest::Table, JoinRequest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_join_request_gym_id")
                            .from(JoinRequest::Table, JoinRequest::GymId)
                            .to(Gym::Table, Gym::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_join_request_gym_status")
                    .table(JoinRequest::Table)
                    .col(JoinRequest::GymId)
                    .col(JoinRequest::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JoinRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JoinRequest {
    Table,
    Id,
    UserId,
    GymId,
    ContactNumber,
    Status,
    CreatedAt,
    UpdatedAt,
}
