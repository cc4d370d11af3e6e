//! Test scaffolding for the FitClub backend.
//!
//! `builder::TestBuilder` creates an in-memory SQLite schema from entity
//! definitions, and `factory` seeds accounts, gyms, rosters, plans, requests
//! and messages with unique defaults.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn member_sees_own_gym() -> Result<(), AppError> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let fixture = factory::helpers::create_gym_with_roster(db).await?;
//!     // fixture.owner, fixture.gym, fixture.trainer_user, fixture.member, ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
