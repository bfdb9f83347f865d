use crate::server::{
    data::movie::MovieRepository,
    error::AppError,
    model::movie::{CreateMovieParam, UpdateMovieParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_active;
mod get_all;
mod get_by_id;
mod set_active;
mod update;
