use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gym::Table)
                    .if_not_exists()
                    .col(pk_auto(Gym::Id))
                    .col(string(Gym::Name))
                    .col(string(Gym::Address))
                    .col(integer_uniq(Gym::OwnerId))
                    .col(string_null(Gym::OwnerFullName))
                    .col(string_null(Gym::OwnerPhone))
                    .col(
                        timestamp_with_time_zone(Gym::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gym_owner_id")
                            .from(Gym::Table, Gym::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gym::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gym {
    Table,
    Id,
    Name,
    Address,
    OwnerId,
    OwnerFullName,
    OwnerPhone,
    CreatedAt,
}
