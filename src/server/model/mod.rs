//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! validated input from controllers into services.

pub mod gym;
pub mod member;
pub mod membership;
pub mod message;
pub mod plan;
pub mod request;
pub mod trainer;
pub mod user;
