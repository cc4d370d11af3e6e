pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_gym_table;
mod m20260301_000003_create_gym_photo_table;
mod m20260301_000004_create_membership_plan_table;
mod m20260301_000005_create_trainer_table;
mod m20260301_000006_create_member_table;
mod m20260301_000007_create_membership_table;
mod m20260301_000008_create_plan_table;
mod m20260302_000009_create_join_request_table;
mod m20260302_000010_create_plan_request_table;
mod m20260302_000011_create_renewal_request_table;
mod m20260302_000012_create_message_table;
mod m20260303_000013_create_unique_indexes;

pub use m20260303_000013_create_unique_indexes::UNIQUE_INDEXES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_gym_table::Migration),
            Box::new(m20260301_000003_create_gym_photo_table::Migration),
            Box::new(m20260301_000004_create_membership_plan_table::Migration),
            Box::new(m20260301_000005_create_trainer_table::Migration),
            Box::new(m20260301_000006_create_member_table::Migration),
            Box::new(m20260301_000007_create_membership_table::Migration),
            Box::new(m20260301_000008_create_plan_table::Migration),
            Box::new(m20260302_000009_create_join_request_table::Migration),
            Box::new(m20260302_000010_create_plan_request_table::Migration),
            Box::new(m20260302_000011_create_renewal_request_table::Migration),
            Box::new(m20260302_000012_create_message_table::Migration),
            Box::new(m20260303_000013_create_unique_indexes::Migration),
        ]
    }
}
