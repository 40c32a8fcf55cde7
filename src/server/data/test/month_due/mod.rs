use crate::server::data::month_due::MonthDueRepository;
use entity::fee_record::FeeMonth;
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
