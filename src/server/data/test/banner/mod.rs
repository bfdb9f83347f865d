use chrono::{NaiveDate, NaiveDateTime};

use crate::server::{
    data::banner::BannerRepository,
    error::AppError,
    model::banner::{CreateBannerParam, UpdateBannerParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_active;
mod get_all;
mod get_by_id;
mod increment_click_count;
mod update;

/// Builds a whole-second datetime for assertions.
fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
