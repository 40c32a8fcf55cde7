//! Fee computation and reconciliation service.
//!
//! This module provides the `FeeService`, the engine behind fee payment
//! submission. Recording a payment assigns the receipt and serial numbers,
//! applies any credit carried over from the previous month, settles the
//! month's due, and recomputes the student's outstanding balance — all
//! inside one write transaction so concurrent submissions can never share a
//! receipt number.
//!
//! Every monetary amount is settled to cents between steps; see
//! `util::money::round2`.

use rust_decimal::Decimal;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, Iterable, SqlErr, TransactionTrait,
};

use crate::server::{
    data::{
        fee_record::FeeRecordRepository,
        month_due::MonthDueRepository,
        sequence::{SequenceName, SequenceRepository},
        student::StudentRepository,
    },
    error::AppError,
    model::fee::{CreateFeeRecordParams, DueSummary, FeeRecord, RecordPaymentParams},
    util::{money::round2, words::amount_in_words},
};

use entity::fee_record::{FeeMonth, FeeStatus};

/// Attempts at assigning receipt/serial numbers before giving up.
///
/// The counters are advanced inside the write transaction, so a collision
/// only happens when existing records carry numbers the counters have not
/// caught up with, e.g. rows imported from an older system. Each retry
/// resynchronizes the counters with the observed maximums first.
const MAX_SEQUENCE_ATTEMPTS: u32 = 3;

/// Service providing fee payment recording and dues reporting.
pub struct FeeService<'a> {
    /// Database connection for fee data access via repositories
    db: &'a DatabaseConnection,
}

impl<'a> FeeService<'a> {
    /// Creates a new FeeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FeeService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a fee payment for a student
    ///
    /// The month's expected amount comes from the tracked month due when one
    /// exists, else the student's monthly fee. The payment plus any credit
    /// carried from a fully settled previous month is applied against it:
    /// a surplus becomes `extra_fee` and zeroes the month, a shortfall
    /// becomes `due_amount` and is written back so a later payment for the
    /// same month only owes the remainder. The student's overall balance is
    /// recomputed across all their records and floored at zero.
    ///
    /// Receipt and serial numbers are taken from atomic counters inside the
    /// same transaction as the insert. When existing records outrun a
    /// counter the unique index rejects the insert; the counters are then
    /// raised to the observed maximums and the whole attempt is retried a
    /// bounded number of times before surfacing `Conflict`.
    ///
    /// # Arguments
    /// - `params`: Raw payment facts; every derived amount is computed here
    ///
    /// # Returns
    /// - `Ok(FeeRecord)`: The persisted record with assigned numbers
    /// - `Err(AppError)`: Validation, not-found, conflict, or database error
    pub async fn record_payment(&self, params: RecordPaymentParams) -> Result<FeeRecord, AppError> {
        if params.fee_paid < Decimal::ZERO {
            return Err(AppError::Validation(
                "Fee paid must not be negative".to_string(),
            ));
        }
        if params.other_fee < Decimal::ZERO {
            return Err(AppError::Validation(
                "Other fee must not be negative".to_string(),
            ));
        }

        let student = StudentRepository::new(self.db)
            .get_by_id(params.student_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Student {} not found", params.student_id))
            })?;

        for _ in 0..MAX_SEQUENCE_ATTEMPTS {
            let txn = self.db.begin().await?;

            match self.attempt_payment(&txn, &student, &params).await {
                Ok(record) => {
                    txn.commit().await?;
                    return Ok(FeeRecord::from_entity(record));
                }
                Err(err) => {
                    let unique_violation =
                        matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)));
                    txn.rollback().await?;

                    if !unique_violation {
                        return Err(err.into());
                    }

                    tracing::warn!(
                        "Receipt numbering collided for student {}, resyncing counters",
                        student.id
                    );
                    self.resync_counters().await?;
                }
            }
        }

        Err(AppError::Conflict(format!(
            "Receipt numbering still conflicted after {} attempts",
            MAX_SEQUENCE_ATTEMPTS
        )))
    }

    /// Adjusts the expected total against one fee record
    ///
    /// Administrative correction: recomputes the record's `due_amount` and
    /// status from the corrected total, leaving the payment amounts, the
    /// assigned numbers, and every other record untouched.
    ///
    /// # Arguments
    /// - `fee_record_id`: Fee record to adjust
    /// - `new_total_fee`: Corrected amount expected against the record
    ///
    /// # Returns
    /// - `Ok(FeeRecord)`: The adjusted record
    /// - `Err(AppError)`: Validation, not-found, or database error
    pub async fn adjust_total_fee(
        &self,
        fee_record_id: i32,
        new_total_fee: Decimal,
    ) -> Result<FeeRecord, AppError> {
        if new_total_fee < Decimal::ZERO {
            return Err(AppError::Validation(
                "Total fee must not be negative".to_string(),
            ));
        }

        let repo = FeeRecordRepository::new(self.db);
        let record = repo.get_by_id(fee_record_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Fee record {} not found", fee_record_id))
        })?;

        let remainder = round2(new_total_fee - record.paid_amount);
        let status = if remainder <= Decimal::ZERO {
            FeeStatus::Paid
        } else {
            FeeStatus::Due
        };
        let due_amount = remainder.max(Decimal::ZERO);

        let updated = repo.update_dues(record.id, due_amount, status).await?;

        Ok(FeeRecord::from_entity(updated))
    }

    /// Summarizes a student's outstanding dues
    ///
    /// Reports the months with no payment record at all, the aggregate
    /// outstanding balance, and the amount of the most recent payment.
    ///
    /// # Arguments
    /// - `student_id`: Student ID
    ///
    /// # Returns
    /// - `Ok(DueSummary)`: The computed summary
    /// - `Err(AppError)`: Not-found or database error
    pub async fn due_summary(&self, student_id: i32) -> Result<DueSummary, AppError> {
        let student = StudentRepository::new(self.db)
            .get_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

        let records = FeeRecordRepository::new(self.db)
            .get_by_student(student_id)
            .await?;

        let due_months = FeeMonth::iter()
            .filter(|month| !records.iter().any(|record| record.fee_month == *month))
            .collect();

        let paid_total = round2(records.iter().map(|record| record.paid_amount).sum());
        let total_due_amount = round2(student.total_fee - paid_total).max(Decimal::ZERO);

        let most_recent_paid_amount = records
            .iter()
            .max_by_key(|record| (record.created_at, record.id))
            .map(|record| record.paid_amount);

        Ok(DueSummary {
            student_id,
            due_months,
            total_due_amount,
            most_recent_paid_amount,
        })
    }

    /// Runs one numbering-and-insert attempt inside a transaction.
    ///
    /// Every read and write happens on `txn`; a unique violation from the
    /// insert leaves nothing behind once the caller rolls back.
    async fn attempt_payment(
        &self,
        txn: &DatabaseTransaction,
        student: &entity::student::Model,
        params: &RecordPaymentParams,
    ) -> Result<entity::fee_record::Model, DbErr> {
        let sequences = SequenceRepository::new(txn);
        let receipt_no = sequences.next_value(SequenceName::ReceiptNo).await?;
        let sr_no = sequences.next_value(SequenceName::SrNo).await?;

        let records = FeeRecordRepository::new(txn);
        let month_dues = MonthDueRepository::new(txn);

        let paid_amount = round2(params.fee_paid + params.other_fee);

        // Credit carried in from the previous month, if that month was
        // fully settled. January opens the fee year and carries nothing.
        let carried_credit = match params.fee_month.previous() {
            Some(previous) => records
                .latest_settled_in_month(student.id, previous)
                .await?
                .map(|record| record.extra_fee)
                .unwrap_or(Decimal::ZERO),
            None => Decimal::ZERO,
        };
        let available = round2(paid_amount + carried_credit);

        let month_due = month_dues
            .get(student.id, params.fee_month)
            .await?
            .map(|row| row.due_amount)
            .unwrap_or(student.monthly_fee);

        let (extra_fee, due_amount) = if available >= month_due {
            let surplus = round2(available - month_due);
            month_dues
                .upsert(student.id, params.fee_month, Decimal::ZERO)
                .await?;
            (surplus, Decimal::ZERO)
        } else {
            let remainder = round2(month_due - available);
            month_dues
                .upsert(student.id, params.fee_month, remainder)
                .await?;
            (Decimal::ZERO, remainder)
        };

        let previously_paid = round2(
            records
                .get_by_student(student.id)
                .await?
                .iter()
                .map(|record| record.paid_amount)
                .sum(),
        );
        let balance = round2(student.total_fee - previously_paid - paid_amount);
        let total_dues = balance.max(Decimal::ZERO);
        let status = if balance <= Decimal::ZERO {
            FeeStatus::Paid
        } else {
            FeeStatus::Due
        };

        records
            .create(CreateFeeRecordParams {
                student_id: student.id,
                fee_month: params.fee_month,
                fee_paid: round2(params.fee_paid),
                other_fee: round2(params.other_fee),
                paid_amount,
                total: paid_amount,
                extra_fee,
                due_amount,
                total_dues,
                status,
                receipt_no,
                sr_no,
                amount_in_words: amount_in_words(paid_amount),
                payment_mode: params.payment_mode.clone(),
                payment_reference: params.payment_reference.clone(),
                bank_name: params.bank_name.clone(),
                remark: params.remark.clone(),
                received_by: params.received_by.clone(),
            })
            .await
    }

    /// Raises both counters to the maximums observed in the table.
    async fn resync_counters(&self) -> Result<(), DbErr> {
        let records = FeeRecordRepository::new(self.db);
        let sequences = SequenceRepository::new(self.db);

        if let Some(max) = records.max_receipt_no().await? {
            sequences.raise_to(SequenceName::ReceiptNo, max).await?;
        }
        if let Some(max) = records.max_sr_no().await? {
            sequences.raise_to(SequenceName::SrNo, max).await?;
        }

        Ok(())
    }
}
