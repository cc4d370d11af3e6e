mod auth;
mod join_request;
mod membership;
mod message;
mod trainer;
