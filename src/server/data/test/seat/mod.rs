use crate::server::{
    data::seat::SeatRepository,
    error::AppError,
    model::seat::{SeatPosition, SeatStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod get_by_hall;
mod get_by_id;
mod set_status;
