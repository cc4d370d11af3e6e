//! Business logic layer.
//!
//! Services resolve the caller's gym scope, validate input, call repositories
//! and run multi-row workflow steps inside a single transaction. They return
//! domain models; controllers convert those to DTOs.

pub mod auth;
pub mod gym;
pub mod join_request;
pub mod member;
pub mod member_action;
pub mod membership;
pub mod message;
pub mod plan;
pub mod scope;
pub mod trainer;

#[cfg(test)]
mod test;
