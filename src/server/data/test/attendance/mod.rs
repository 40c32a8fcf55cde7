use crate::server::data::attendance::AttendanceRepository;
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod class_counts;
mod create;
mod rollover;
mod upsert_day;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
