use crate::server::{data::user_status::UserStatusRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod find_by_name;
mod insert_many;
