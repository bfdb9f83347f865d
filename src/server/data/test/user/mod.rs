use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam},
};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod delete;
mod find_by_email;
mod get_all;
mod get_by_id;
mod set_status;
mod update;
