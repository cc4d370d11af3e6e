//! SeaORM entity models for the FitClub database.
//!
//! One module per table. Roles, plan types and request statuses are stored as
//! plain strings and parsed into domain enums at the repository boundary.

pub mod prelude;

pub mod gym;
pub mod gym_photo;
pub mod join_request;
pub mod member;
pub mod membership;
pub mod membership_plan;
pub mod message;
pub mod plan;
pub mod plan_request;
pub mod renewal_request;
pub mod trainer;
pub mod user;
