//! Domain models for fee computation and reconciliation.
//!
//! Defines the settled fee record produced by the payment pipeline, the
//! parameter types feeding it, and the outstanding-dues summary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use entity::fee_record::{FeeMonth, FeeStatus};

/// Settled fee payment record for one student and one fee month.
///
/// Every monetary field is fixed at payment time by the reconciliation
/// pipeline; later payments never rewrite an existing record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeRecord {
    /// Unique identifier for the record.
    pub id: i32,
    /// ID of the student the payment belongs to.
    pub student_id: i32,
    /// Fee month the payment was applied to.
    pub fee_month: FeeMonth,
    /// Amount paid against the monthly fee.
    pub fee_paid: Decimal,
    /// Amount paid against other charges.
    pub other_fee: Decimal,
    /// Sum of `fee_paid` and `other_fee`, settled to cents.
    pub paid_amount: Decimal,
    /// Grand total of the payment. Mirrors `paid_amount`.
    pub total: Decimal,
    /// Overpayment beyond the month's due, carried into the next month.
    pub extra_fee: Decimal,
    /// Amount still owed for the month after this payment.
    pub due_amount: Decimal,
    /// Outstanding balance across the whole year after this payment.
    pub total_dues: Decimal,
    /// Whether the year's fees are fully paid as of this record.
    pub status: FeeStatus,
    /// Globally unique receipt number.
    pub receipt_no: i64,
    /// Globally unique serial number.
    pub sr_no: i64,
    /// Paid amount spelled out in words for the printed receipt.
    pub amount_in_words: String,
    /// How the payment was made, e.g. cash or bank transfer.
    pub payment_mode: Option<String>,
    /// External reference such as a cheque or transaction number.
    pub payment_reference: Option<String>,
    /// Bank the payment was drawn on, if any.
    pub bank_name: Option<String>,
    /// Free-form remark entered with the payment.
    pub remark: Option<String>,
    /// Name of the staff member who received the payment.
    pub received_by: Option<String>,
    /// Timestamp when the record was created.
    pub created_at: DateTime<Utc>,
}

impl FeeRecord {
    /// Converts an entity model to a fee record domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `FeeRecord` - The converted fee record domain model
    pub fn from_entity(entity: entity::fee_record::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            fee_month: entity.fee_month,
            fee_paid: entity.fee_paid,
            other_fee: entity.other_fee,
            paid_amount: entity.paid_amount,
            total: entity.total,
            extra_fee: entity.extra_fee,
            due_amount: entity.due_amount,
            total_dues: entity.total_dues,
            status: entity.status,
            receipt_no: entity.receipt_no,
            sr_no: entity.sr_no,
            amount_in_words: entity.amount_in_words,
            payment_mode: entity.payment_mode,
            payment_reference: entity.payment_reference,
            bank_name: entity.bank_name,
            remark: entity.remark,
            received_by: entity.received_by,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for recording a fee payment.
///
/// Only the raw payment facts. Every derived amount, the receipt and serial
/// numbers, and the dues position are computed by the payment pipeline.
#[derive(Debug, Clone)]
pub struct RecordPaymentParams {
    /// ID of the student making the payment.
    pub student_id: i32,
    /// Fee month the payment applies to.
    pub fee_month: FeeMonth,
    /// Amount paid against the monthly fee.
    pub fee_paid: Decimal,
    /// Amount paid against other charges.
    pub other_fee: Decimal,
    /// How the payment was made, e.g. cash or bank transfer.
    pub payment_mode: Option<String>,
    /// External reference such as a cheque or transaction number.
    pub payment_reference: Option<String>,
    /// Bank the payment was drawn on, if any.
    pub bank_name: Option<String>,
    /// Free-form remark entered with the payment.
    pub remark: Option<String>,
    /// Name of the staff member who received the payment.
    pub received_by: Option<String>,
}

/// Parameters for inserting a fully computed fee record row.
#[derive(Debug, Clone)]
pub struct CreateFeeRecordParams {
    pub student_id: i32,
    pub fee_month: FeeMonth,
    pub fee_paid: Decimal,
    pub other_fee: Decimal,
    pub paid_amount: Decimal,
    pub total: Decimal,
    pub extra_fee: Decimal,
    pub due_amount: Decimal,
    pub total_dues: Decimal,
    pub status: FeeStatus,
    pub receipt_no: i64,
    pub sr_no: i64,
    pub amount_in_words: String,
    pub payment_mode: Option<String>,
    pub payment_reference: Option<String>,
    pub bank_name: Option<String>,
    pub remark: Option<String>,
    pub received_by: Option<String>,
}

/// Outstanding-dues summary for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct DueSummary {
    /// ID of the student the summary describes.
    pub student_id: i32,
    /// Months of the fee year with no payment record at all, in fee-year order.
    pub due_months: Vec<FeeMonth>,
    /// Total annual fee minus everything paid so far, floored at zero.
    pub total_due_amount: Decimal,
    /// Paid amount on the most recently created record, if any exist.
    pub most_recent_paid_amount: Option<Decimal>,
}
