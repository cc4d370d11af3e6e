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
                    .table(GymPhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(GymPhoto::Id))
                    .col(integer(GymPhoto::GymId))
                    .col(string(GymPhoto::Url))
                    .col(integer(GymPhoto::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gym_photo_gym_id")
                            .from(GymPhoto::Table, GymPhoto::GymId)
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
            .drop_table(Table::drop().table(GymPhoto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GymPhoto {
    Table,
    Id,
    GymId,
    Url,
    Position,
}
