use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use crate::server::{
    data::{attendance::AttendanceRepository, student::StudentRepository},
    error::AppError,
    model::student::{CreateStudentParams, RegisterStudentParams, Student},
    util::money::round2,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new student
    ///
    /// Derives the monthly fee as one twelfth of the total fee and opens the
    /// student's attendance ledger in the same transaction, so a student
    /// never exists without a ledger.
    ///
    /// # Arguments
    /// - `params`: Registration data
    ///
    /// # Returns
    /// - `Ok(Student)`: The registered student
    /// - `Err(AppError)`: Validation, not-found, or database error
    pub async fn register(&self, params: RegisterStudentParams) -> Result<Student, AppError> {
        if params.total_fee < Decimal::ZERO {
            return Err(AppError::Validation(
                "Total fee must not be negative".to_string(),
            ));
        }

        entity::prelude::SchoolClass::find_by_id(params.class_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Class {} not found", params.class_id)))?;

        let total_fee = round2(params.total_fee);
        let monthly_fee = Self::derive_monthly_fee(total_fee);

        let txn = self.db.begin().await?;

        let student = StudentRepository::new(&txn)
            .create(CreateStudentParams {
                class_id: params.class_id,
                name: params.name,
                guardian_phone: params.guardian_phone,
                guardian_email: params.guardian_email,
                total_fee,
                monthly_fee,
            })
            .await?;

        // Open the ledger alongside the student, defaulting to absent.
        AttendanceRepository::new(&txn)
            .create(student.id, false, student.created_at)
            .await?;

        txn.commit().await?;

        Ok(Student::from_entity(student))
    }

    /// Gets a student by ID
    ///
    /// # Arguments
    /// - `id`: Student ID
    ///
    /// # Returns
    /// - `Ok(Student)`: The student
    /// - `Err(AppError)`: Not-found or database error
    pub async fn get(&self, id: i32) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))?;

        Ok(Student::from_entity(student))
    }

    /// Corrects a student's total fee
    ///
    /// Administrative correction of the fee plan. The monthly fee is
    /// re-derived from the corrected total.
    ///
    /// # Arguments
    /// - `id`: Student ID
    /// - `new_total_fee`: Corrected total fee for the academic year
    ///
    /// # Returns
    /// - `Ok(Student)`: The student with the corrected fee plan
    /// - `Err(AppError)`: Validation, not-found, or database error
    pub async fn correct_total_fee(
        &self,
        id: i32,
        new_total_fee: Decimal,
    ) -> Result<Student, AppError> {
        if new_total_fee < Decimal::ZERO {
            return Err(AppError::Validation(
                "Total fee must not be negative".to_string(),
            ));
        }

        let repo = StudentRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))?;

        let total_fee = round2(new_total_fee);
        let student = repo
            .update_fee_plan(id, total_fee, Self::derive_monthly_fee(total_fee))
            .await?;

        Ok(Student::from_entity(student))
    }

    /// Removes a student
    ///
    /// Fee records, month dues, notices, and the attendance ledger go with
    /// the student via cascading foreign keys.
    ///
    /// # Arguments
    /// - `id`: Student ID
    ///
    /// # Returns
    /// - `Ok(())`: Student removed
    /// - `Err(AppError)`: Not-found or database error
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))?;

        repo.delete(id).await?;

        Ok(())
    }

    fn derive_monthly_fee(total_fee: Decimal) -> Decimal {
        round2(total_fee / Decimal::from(12))
    }
}
