use crate::server::{data::fee_record::FeeRecordRepository, model::fee::CreateFeeRecordParams};
use chrono::{Duration, Utc};
use entity::fee_record::{FeeMonth, FeeStatus};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::fee_record::FeeRecordFactory};

mod queries;

fn settled_params(student_id: i32, receipt_no: i64, sr_no: i64) -> CreateFeeRecordParams {
    CreateFeeRecordParams {
        student_id,
        fee_month: FeeMonth::January,
        fee_paid: Decimal::from(100),
        other_fee: Decimal::ZERO,
        paid_amount: Decimal::from(100),
        total: Decimal::from(100),
        extra_fee: Decimal::ZERO,
        due_amount: Decimal::ZERO,
        total_dues: Decimal::from(1100),
        status: FeeStatus::Due,
        receipt_no,
        sr_no,
        amount_in_words: "one hundred and 00/100".to_string(),
        payment_mode: Some("Cash".to_string()),
        payment_reference: None,
        bank_name: None,
        remark: None,
        received_by: None,
    }
}
