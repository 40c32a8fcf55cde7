use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::fee::CreateFeeRecordParams;
use entity::fee_record::{FeeMonth, FeeStatus};

pub struct FeeRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeeRecordRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new fee record
    ///
    /// All monetary fields arrive fully computed; the repository stores them
    /// as given.
    ///
    /// # Arguments
    /// - `params`: Computed record fields including receipt and serial numbers
    ///
    /// # Returns
    /// - `Ok(Model)`: The created fee record
    /// - `Err(DbErr)`: Database error, including unique violations on
    ///   `receipt_no`/`sr_no`
    pub async fn create(
        &self,
        params: CreateFeeRecordParams,
    ) -> Result<entity::fee_record::Model, DbErr> {
        entity::fee_record::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            fee_month: ActiveValue::Set(params.fee_month),
            fee_paid: ActiveValue::Set(params.fee_paid),
            other_fee: ActiveValue::Set(params.other_fee),
            paid_amount: ActiveValue::Set(params.paid_amount),
            total: ActiveValue::Set(params.total),
            extra_fee: ActiveValue::Set(params.extra_fee),
            due_amount: ActiveValue::Set(params.due_amount),
            total_dues: ActiveValue::Set(params.total_dues),
            status: ActiveValue::Set(params.status),
            receipt_no: ActiveValue::Set(params.receipt_no),
            sr_no: ActiveValue::Set(params.sr_no),
            amount_in_words: ActiveValue::Set(params.amount_in_words),
            payment_mode: ActiveValue::Set(params.payment_mode),
            payment_reference: ActiveValue::Set(params.payment_reference),
            bank_name: ActiveValue::Set(params.bank_name),
            remark: ActiveValue::Set(params.remark),
            received_by: ActiveValue::Set(params.received_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a fee record by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The fee record
    /// - `Ok(None)`: Fee record not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::fee_record::Model>, DbErr> {
        entity::prelude::FeeRecord::find_by_id(id).one(self.db).await
    }

    /// Gets all fee records for a student, oldest first
    ///
    /// # Arguments
    /// - `student_id`: Student ID
    ///
    /// # Returns
    /// - `Ok(records)`: Vector of fee records ordered by creation time
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::fee_record::Model>, DbErr> {
        entity::prelude::FeeRecord::find()
            .filter(entity::fee_record::Column::StudentId.eq(student_id))
            .order_by_asc(entity::fee_record::Column::CreatedAt)
            .order_by_asc(entity::fee_record::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the most recently created fee record for a student
    ///
    /// # Arguments
    /// - `student_id`: Student ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The latest fee record
    /// - `Ok(None)`: The student has no fee records
    /// - `Err(DbErr)`: Database error
    pub async fn latest_for_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::fee_record::Model>, DbErr> {
        entity::prelude::FeeRecord::find()
            .filter(entity::fee_record::Column::StudentId.eq(student_id))
            .order_by_desc(entity::fee_record::Column::CreatedAt)
            .order_by_desc(entity::fee_record::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the most recently created fully settled record for a student and month
    ///
    /// A record is fully settled when its `due_amount` is zero. Ties are
    /// broken by creation time, newest first.
    ///
    /// # Arguments
    /// - `student_id`: Student ID
    /// - `fee_month`: Month to look in
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The latest settled record for the month
    /// - `Ok(None)`: No settled record exists for the month
    /// - `Err(DbErr)`: Database error
    pub async fn latest_settled_in_month(
        &self,
        student_id: i32,
        fee_month: FeeMonth,
    ) -> Result<Option<entity::fee_record::Model>, DbErr> {
        entity::prelude::FeeRecord::find()
            .filter(entity::fee_record::Column::StudentId.eq(student_id))
            .filter(entity::fee_record::Column::FeeMonth.eq(fee_month))
            .filter(entity::fee_record::Column::DueAmount.eq(Decimal::ZERO))
            .order_by_desc(entity::fee_record::Column::CreatedAt)
            .order_by_desc(entity::fee_record::Column::Id)
            .one(self.db)
            .await
    }

    /// Checks whether a student has any fee record for a month
    ///
    /// # Arguments
    /// - `student_id`: Student ID
    /// - `fee_month`: Month to check
    ///
    /// # Returns
    /// - `Ok(bool)`: Whether at least one record exists
    /// - `Err(DbErr)`: Database error
    pub async fn exists_for_month(
        &self,
        student_id: i32,
        fee_month: FeeMonth,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::FeeRecord::find()
            .filter(entity::fee_record::Column::StudentId.eq(student_id))
            .filter(entity::fee_record::Column::FeeMonth.eq(fee_month))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the highest receipt number on record
    ///
    /// # Returns
    /// - `Ok(Some(i64))`: The highest assigned receipt number
    /// - `Ok(None)`: No fee records exist
    /// - `Err(DbErr)`: Database error
    pub async fn max_receipt_no(&self) -> Result<Option<i64>, DbErr> {
        let record = entity::prelude::FeeRecord::find()
            .order_by_desc(entity::fee_record::Column::ReceiptNo)
            .one(self.db)
            .await?;

        Ok(record.map(|r| r.receipt_no))
    }

    /// Gets the highest serial number on record
    ///
    /// # Returns
    /// - `Ok(Some(i64))`: The highest assigned serial number
    /// - `Ok(None)`: No fee records exist
    /// - `Err(DbErr)`: Database error
    pub async fn max_sr_no(&self) -> Result<Option<i64>, DbErr> {
        let record = entity::prelude::FeeRecord::find()
            .order_by_desc(entity::fee_record::Column::SrNo)
            .one(self.db)
            .await?;

        Ok(record.map(|r| r.sr_no))
    }

    /// Updates the due position of a single record
    ///
    /// Leaves every payment field and both assigned numbers untouched.
    ///
    /// # Arguments
    /// - `id`: Fee record ID
    /// - `due_amount`: New due amount for the record's month
    /// - `status`: New paid/due status
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated fee record
    /// - `Err(DbErr)`: Database error, including record-not-found
    pub async fn update_dues(
        &self,
        id: i32,
        due_amount: Decimal,
        status: FeeStatus,
    ) -> Result<entity::fee_record::Model, DbErr> {
        let record = entity::prelude::FeeRecord::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Fee record {} not found",
                id
            )))?;

        let mut active_model: entity::fee_record::ActiveModel = record.into();
        active_model.due_amount = ActiveValue::Set(due_amount);
        active_model.status = ActiveValue::Set(status);

        active_model.update(self.db).await
    }
}
