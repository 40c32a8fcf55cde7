use migration::OnConflict;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use entity::fee_record::FeeMonth;

/// Repository for the per-student month-to-due mapping.
///
/// Each row answers "how much is still expected for this month" for one
/// student. A missing row means the month has never been touched and the
/// student's monthly fee applies.
pub struct MonthDueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MonthDueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sets the due amount tracked for a student and month
    ///
    /// Inserts the row on first write, updates it in place afterwards.
    ///
    /// # Arguments
    /// - `student_id`: Student ID
    /// - `fee_month`: Month being tracked
    /// - `due_amount`: Amount still expected for the month
    ///
    /// # Returns
    /// - `Ok(Model)`: The written row
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        student_id: i32,
        fee_month: FeeMonth,
        due_amount: Decimal,
    ) -> Result<entity::month_due::Model, DbErr> {
        entity::prelude::MonthDue::insert(entity::month_due::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            fee_month: ActiveValue::Set(fee_month),
            due_amount: ActiveValue::Set(due_amount),
        })
        .on_conflict(
            OnConflict::columns([
                entity::month_due::Column::StudentId,
                entity::month_due::Column::FeeMonth,
            ])
            .update_columns([entity::month_due::Column::DueAmount])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Gets the tracked due amount for a student and month
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The tracked row
    /// - `Ok(None)`: The month has never been tracked for this student
    /// - `Err(DbErr)`: Database error
    pub async fn get(
        &self,
        student_id: i32,
        fee_month: FeeMonth,
    ) -> Result<Option<entity::month_due::Model>, DbErr> {
        entity::prelude::MonthDue::find_by_id((student_id, fee_month))
            .one(self.db)
            .await
    }
}
