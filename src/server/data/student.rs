use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::student::CreateStudentParams;

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student
    ///
    /// # Arguments
    /// - `params`: Registration fields plus the derived monthly fee
    ///
    /// # Returns
    /// - `Ok(Model)`: The created student
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateStudentParams,
    ) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            class_id: ActiveValue::Set(params.class_id),
            name: ActiveValue::Set(params.name),
            guardian_phone: ActiveValue::Set(params.guardian_phone),
            guardian_email: ActiveValue::Set(params.guardian_email),
            total_fee: ActiveValue::Set(params.total_fee),
            monthly_fee: ActiveValue::Set(params.monthly_fee),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a student by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The student
    /// - `Ok(None)`: Student not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// Gets all students ordered by ID
    ///
    /// # Returns
    /// - `Ok(students)`: Vector of all students
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates a student's fee plan
    ///
    /// Both amounts arrive computed; the repository stores them as given.
    ///
    /// # Arguments
    /// - `id`: Student ID
    /// - `total_fee`: Corrected total fee for the academic year
    /// - `monthly_fee`: Monthly fee re-derived from the corrected total
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated student
    /// - `Err(DbErr)`: Database error, including record-not-found
    pub async fn update_fee_plan(
        &self,
        id: i32,
        total_fee: Decimal,
        monthly_fee: Decimal,
    ) -> Result<entity::student::Model, DbErr> {
        let student = entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Student {} not found", id)))?;

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.total_fee = ActiveValue::Set(total_fee);
        active_model.monthly_fee = ActiveValue::Set(monthly_fee);

        active_model.update(self.db).await
    }

    /// Deletes a student by ID
    ///
    /// The student's fee records, month dues, and attendance ledger go with
    /// it via cascading foreign keys.
    ///
    /// # Arguments
    /// - `id`: Student ID
    ///
    /// # Returns
    /// - `Ok(())`: Student deleted successfully
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
