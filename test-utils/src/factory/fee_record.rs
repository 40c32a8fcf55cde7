//! Fee record factory for creating test fee record entities.
//!
//! Provides factory methods for creating fee record entities with sensible
//! defaults, reducing boilerplate in tests. The factory defaults to a fully
//! settled record; use the builder setters to shape dues scenarios.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::fee_record::{FeeMonth, FeeStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test fee records with customizable fields.
///
/// `paid_amount` and `total` are always derived from `fee_paid + other_fee`,
/// matching how the fee engine writes records. Receipt and serial numbers
/// come from the shared test counter, so factory-made records never collide
/// with each other; records written by the engine under test should be
/// created through the engine instead.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::fee_record::FeeRecordFactory;
///
/// let record = FeeRecordFactory::new(&db, student.id)
///     .fee_month(FeeMonth::March)
///     .fee_paid(Decimal::from(60))
///     .due_amount(Decimal::from(40))
///     .status(FeeStatus::Due)
///     .build()
///     .await?;
/// ```
pub struct FeeRecordFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    fee_month: FeeMonth,
    fee_paid: Decimal,
    other_fee: Decimal,
    extra_fee: Decimal,
    due_amount: Decimal,
    total_dues: Decimal,
    status: FeeStatus,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> FeeRecordFactory<'a> {
    /// Creates a new FeeRecordFactory with default values.
    ///
    /// Defaults describe a settled January payment of 100:
    /// - fee_month: `January`
    /// - fee_paid: `100`, other_fee: `0`
    /// - extra_fee / due_amount / total_dues: `0`
    /// - status: `Paid`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `student_id` - Student the record belongs to
    ///
    /// # Returns
    /// - `FeeRecordFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            fee_month: FeeMonth::January,
            fee_paid: Decimal::from(100),
            other_fee: Decimal::ZERO,
            extra_fee: Decimal::ZERO,
            due_amount: Decimal::ZERO,
            total_dues: Decimal::ZERO,
            status: FeeStatus::Paid,
            created_at: Utc::now(),
        }
    }

    /// Sets the fee month.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn fee_month(mut self, fee_month: FeeMonth) -> Self {
        self.fee_month = fee_month;
        self
    }

    /// Sets the tuition portion of the payment.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn fee_paid(mut self, fee_paid: Decimal) -> Self {
        self.fee_paid = fee_paid;
        self
    }

    /// Sets the incidental portion of the payment.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn other_fee(mut self, other_fee: Decimal) -> Self {
        self.other_fee = other_fee;
        self
    }

    /// Sets the surplus carried toward the next month.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn extra_fee(mut self, extra_fee: Decimal) -> Self {
        self.extra_fee = extra_fee;
        self
    }

    /// Sets the unpaid remainder for the record's month.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn due_amount(mut self, due_amount: Decimal) -> Self {
        self.due_amount = due_amount;
        self
    }

    /// Sets the snapshot of the student's overall outstanding balance.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn total_dues(mut self, total_dues: Decimal) -> Self {
        self.total_dues = total_dues;
        self
    }

    /// Sets the settlement status.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: FeeStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp, used to order carry-forward lookups.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the fee record entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::fee_record::Model)` - Created fee record entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::fee_record::Model, DbErr> {
        let paid_amount = self.fee_paid + self.other_fee;
        let number = next_id() as i64;

        entity::fee_record::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            fee_month: ActiveValue::Set(self.fee_month),
            fee_paid: ActiveValue::Set(self.fee_paid),
            other_fee: ActiveValue::Set(self.other_fee),
            paid_amount: ActiveValue::Set(paid_amount),
            total: ActiveValue::Set(paid_amount),
            extra_fee: ActiveValue::Set(self.extra_fee),
            due_amount: ActiveValue::Set(self.due_amount),
            total_dues: ActiveValue::Set(self.total_dues),
            status: ActiveValue::Set(self.status),
            receipt_no: ActiveValue::Set(number),
            sr_no: ActiveValue::Set(number),
            amount_in_words: ActiveValue::Set(String::from("test amount")),
            payment_mode: ActiveValue::Set(Some(String::from("Cash"))),
            payment_reference: ActiveValue::Set(None),
            bank_name: ActiveValue::Set(None),
            remark: ActiveValue::Set(None),
            received_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settled fee record with default values for the student.
///
/// Shorthand for `FeeRecordFactory::new(db, student_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_id` - Student the record belongs to
///
/// # Returns
/// - `Ok(entity::fee_record::Model)` - Created fee record entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_fee_record(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::fee_record::Model, DbErr> {
    FeeRecordFactory::new(db, student_id).build().await
}
