use sea_orm_migration::prelude::*;

/// Unique indexes backing the duplicate checks of plans and pending requests,
/// as `(table, index name, CREATE statement)`.
///
/// Request indexes are partial: settled requests are kept, so only one row per
/// key may be `pending` at a time.
pub const UNIQUE_INDEXES: [(&str, &str, &str); 4] = [
    (
        "plan",
        "idx_plan_member_week_type",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_plan_member_week_type \
         ON plan (member_id, week, plan_type)",
    ),
    (
        "join_request",
        "idx_join_request_pending",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_join_request_pending \
         ON join_request (user_id, gym_id) WHERE status = 'pending'",
    ),
    (
        "plan_request",
        "idx_plan_request_pending",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_plan_request_pending \
         ON plan_request (member_id, week, plan_type) WHERE status = 'pending'",
    ),
    (
        "renewal_request",
        "idx_renewal_request_pending",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_renewal_request_pending \
         ON renewal_request (membership_id) WHERE status = 'pending'",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (_, _, statement) in UNIQUE_INDEXES {
            db.execute_unprepared(statement).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (_, name, _) in UNIQUE_INDEXES {
            db.execute_unprepared(&format!("DROP INDEX IF EXISTS {}", name))
                .await?;
        }

        Ok(())
    }
}
