use chrono::{Duration, Utc};

use crate::{
    model::request::RequestStatus,
    server::{
        error::AppError,
        model::{
            membership::{CreateMembershipParams, UpdateMembershipParams},
            request::RequestAction,
            user::User,
        },
        service::membership::{MembershipService, RENEWAL_EXTENSION_DAYS},
    },
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_gym_with_roster};

mod create;
mod respond_renewal;
