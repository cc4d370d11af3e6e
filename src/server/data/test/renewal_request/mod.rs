use crate::{
    model::request::RequestStatus,
    server::{data::renewal_request::RenewalRequestRepository, model::membership::Membership},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod settle;
