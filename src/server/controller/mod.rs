//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts the request DTO
//! into domain parameters, calls one service operation and converts the
//! result back into a DTO.

pub mod auth;
pub mod gym;
pub mod gym_member;
pub mod health;
pub mod member;
pub mod member_action;
pub mod membership;
pub mod message;
pub mod plan;
pub mod trainer;

#[cfg(test)]
mod test;
