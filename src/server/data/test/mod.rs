mod member;
mod membership;
mod message;
mod renewal_request;
