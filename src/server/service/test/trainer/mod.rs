use sea_orm::EntityTrait;

use crate::server::{error::AppError, model::user::User, service::trainer::TrainerService};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_gym_with_roster};

mod add;
mod remove;
