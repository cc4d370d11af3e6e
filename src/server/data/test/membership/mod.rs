use crate::server::{
    data::membership::MembershipRepository, model::membership::CreateMembershipParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update_dates;
