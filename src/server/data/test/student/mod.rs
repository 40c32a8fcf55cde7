use crate::server::{data::student::StudentRepository, model::student::CreateStudentParams};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod remove;
mod update_fee_plan;
