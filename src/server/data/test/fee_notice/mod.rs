use crate::server::data::fee_notice::FeeNoticeRepository;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
