use crate::server::{data::member::MemberRepository, model::member::CreateMemberParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_gym;
mod create;
mod get_users_by_member_ids;
