use crate::server::{
    data::hall::CinemaHallRepository,
    error::AppError,
    model::hall::{CreateCinemaHallParam, UpdateCinemaHallParam},
};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
