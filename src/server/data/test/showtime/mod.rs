use chrono::{NaiveDate, NaiveDateTime};

use crate::server::{
    data::showtime::ShowTimeRepository,
    error::AppError,
    model::showtime::{CreateShowTimeParam, UpdateShowTimeParam},
};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod count_by_movie;
mod create;
mod delete_by_movie;
mod get_all;
mod get_by_movie;
mod update;

/// Builds a whole-second datetime for assertions.
fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
