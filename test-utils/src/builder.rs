use entity::prelude::*;
use migration::UNIQUE_INDEXES;
use sea_orm::{sea_query::TableCreateStatement, EntityName, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or one of the presets), then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Gym};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Gym)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Names of the configured tables, used to pick the unique indexes to add.
    table_names: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            table_names: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.table_names.push(entity.table_name().to_string());
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables describing a gym and its roster.
    ///
    /// Adds, in dependency order: User, Gym, GymPhoto, MembershipPlan,
    /// Trainer, Member.
    pub fn with_gym_tables(self) -> Self {
        self.with_table(User)
            .with_table(Gym)
            .with_table(GymPhoto)
            .with_table(MembershipPlan)
            .with_table(Trainer)
            .with_table(Member)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Equivalent to `with_gym_tables()` followed by Membership, Plan,
    /// JoinRequest, PlanRequest, RenewalRequest and Message.
    pub fn with_all_tables(self) -> Self {
        self.with_gym_tables()
            .with_table(Membership)
            .with_table(Plan)
            .with_table(JoinRequest)
            .with_table(PlanRequest)
            .with_table(RenewalRequest)
            .with_table(Message)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// The unique indexes of the migrations are created for every configured
    /// table they apply to, so duplicate writes fail here as in production.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        let indexes = UNIQUE_INDEXES
            .iter()
            .filter(|(table, _, _)| self.table_names.iter().any(|name| name == table))
            .map(|(_, _, statement)| *statement);
        setup.with_statements(indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
