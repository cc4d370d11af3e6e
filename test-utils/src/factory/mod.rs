//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories for roster rows create the backing account when one is
//! not supplied.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (owner, gym) = factory::create_gym(&db).await?;
//! let (account, member) = factory::create_member(&db, gym.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("coach@example.com")
//!     .role("Trainer")
//!     .build()
//!     .await?;
//! ```

pub mod gym;
pub mod helpers;
pub mod member;
pub mod membership;
pub mod message;
pub mod plan;
pub mod request;
pub mod trainer;
pub mod user;

pub use gym::create_gym;
pub use member::create_member;
pub use membership::create_membership;
pub use message::create_message;
pub use plan::create_plan;
pub use request::{create_join_request, create_plan_request, create_renewal_request};
pub use trainer::create_trainer;
pub use user::{create_user, create_user_with_role};
