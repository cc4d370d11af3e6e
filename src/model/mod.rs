//! Wire models shared by every HTTP endpoint.
//!
//! All DTOs serialize with camelCase keys and derive `ToSchema` so they show
//! up in the generated OpenAPI document.

pub mod api;
pub mod auth;
pub mod gym;
pub mod member;
pub mod membership;
pub mod message;
pub mod plan;
pub mod request;
pub mod trainer;
pub mod user;
