use chrono::{Duration, Utc};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::message::MessageService,
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_gym_with_roster};

mod conversation;
mod send;
