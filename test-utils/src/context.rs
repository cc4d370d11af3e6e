use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Per-test database holder.
///
/// Each context owns its own `sqlite::memory:` database, so tests never see
/// each other's rows. Foreign keys are enforced, which the cascade, restrict
/// and set-null behaviour of gym, trainer and member deletes depends on.
pub struct TestContext {
    /// Connection to the in-memory database, opened on first use.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening it and enabling foreign keys on the
    /// first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
            self.db = Some(db);
        }

        self.db.as_ref().ok_or(TestError::NotConnected)
    }

    /// Runs the CREATE TABLE statements in order.
    ///
    /// Parents must come before children; `TestBuilder` presets already
    /// follow that order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Runs raw SQL statements in order, such as partial unique indexes that
    /// cannot be derived from entities.
    pub async fn with_statements<'s>(
        &mut self,
        stmts: impl IntoIterator<Item = &'s str>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute_unprepared(stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
