//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity queries and return domain models. Every
//! repository is generic over `ConnectionTrait`, so the same methods run
//! against the shared `DatabaseConnection` or inside a `DatabaseTransaction`
//! when a service needs several writes to commit together.

pub mod gym;
pub mod join_request;
pub mod member;
pub mod membership;
pub mod message;
pub mod plan;
pub mod plan_request;
pub mod renewal_request;
pub mod trainer;
pub mod user;

#[cfg(test)]
mod test;
