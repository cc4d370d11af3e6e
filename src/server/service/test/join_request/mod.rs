use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    model::request::RequestStatus,
    server::{
        error::AppError, model::request::RequestAction, model::user::User,
        service::join_request::JoinRequestService,
    },
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_gym_with_roster};

mod respond;
