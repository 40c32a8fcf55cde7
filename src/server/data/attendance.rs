use chrono::{DateTime, NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an attendance ledger for a student
    ///
    /// # Arguments
    /// - `student_id`: Student ID (one ledger per student)
    /// - `present`: Initial denormalized status
    /// - `marked_at`: Initial mark instant
    ///
    /// # Returns
    /// - `Ok(Model)`: The created ledger head
    /// - `Err(DbErr)`: Database error, including the unique violation when a
    ///   ledger already exists
    pub async fn create(
        &self,
        student_id: i32,
        present: bool,
        marked_at: DateTime<Utc>,
    ) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            present: ActiveValue::Set(present),
            marked_at: ActiveValue::Set(marked_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the ledger head for a student
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The ledger head
    /// - `Ok(None)`: The student has no ledger
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .one(self.db)
            .await
    }

    /// Writes the day-level entry for a ledger and calendar day
    ///
    /// Inserts the entry on first mark. Re-marking the same day updates the
    /// stored flag and instant in place, never adding a second row for the
    /// day.
    ///
    /// # Arguments
    /// - `attendance_id`: Ledger head ID
    /// - `day`: Calendar day in the reference timezone
    /// - `present`: Whether the student was present
    /// - `marked_at`: Exact instant of the mark
    ///
    /// # Returns
    /// - `Ok(Model)`: The written entry
    /// - `Err(DbErr)`: Database error
    pub async fn upsert_day(
        &self,
        attendance_id: i32,
        day: NaiveDate,
        present: bool,
        marked_at: DateTime<Utc>,
    ) -> Result<entity::attendance_entry::Model, DbErr> {
        entity::prelude::AttendanceEntry::insert(entity::attendance_entry::ActiveModel {
            attendance_id: ActiveValue::Set(attendance_id),
            day: ActiveValue::Set(day),
            present: ActiveValue::Set(present),
            marked_at: ActiveValue::Set(marked_at),
        })
        .on_conflict(
            OnConflict::columns([
                entity::attendance_entry::Column::AttendanceId,
                entity::attendance_entry::Column::Day,
            ])
            .update_columns([
                entity::attendance_entry::Column::Present,
                entity::attendance_entry::Column::MarkedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Updates the denormalized status on a ledger head
    ///
    /// # Arguments
    /// - `attendance_id`: Ledger head ID
    /// - `present`: Latest mark
    /// - `marked_at`: Instant of the latest mark
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated ledger head
    /// - `Err(DbErr)`: Database error, including record-not-found
    pub async fn update_head(
        &self,
        attendance_id: i32,
        present: bool,
        marked_at: DateTime<Utc>,
    ) -> Result<entity::attendance::Model, DbErr> {
        let head = entity::prelude::Attendance::find_by_id(attendance_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Attendance ledger {} not found",
                attendance_id
            )))?;

        let mut active_model: entity::attendance::ActiveModel = head.into();
        active_model.present = ActiveValue::Set(present);
        active_model.marked_at = ActiveValue::Set(marked_at);

        active_model.update(self.db).await
    }

    /// Gets the day-level entries of a ledger, oldest day first
    ///
    /// # Returns
    /// - `Ok(entries)`: Vector of entries ordered by day
    /// - `Err(DbErr)`: Database error
    pub async fn entries_for(
        &self,
        attendance_id: i32,
    ) -> Result<Vec<entity::attendance_entry::Model>, DbErr> {
        entity::prelude::AttendanceEntry::find()
            .filter(entity::attendance_entry::Column::AttendanceId.eq(attendance_id))
            .order_by_asc(entity::attendance_entry::Column::Day)
            .all(self.db)
            .await
    }

    /// Defaults stale ledger heads to absent
    ///
    /// Flips `present` to false on every head whose latest mark is strictly
    /// before `cutoff`. Day-level entries and the stored mark instant are
    /// left untouched, so running this twice changes nothing.
    ///
    /// # Arguments
    /// - `cutoff`: UTC instant the current school day began
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of heads flipped
    /// - `Err(DbErr)`: Database error
    pub async fn rollover_stale(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Attendance::update_many()
            .col_expr(entity::attendance::Column::Present, Expr::value(false))
            .filter(entity::attendance::Column::Present.eq(true))
            .filter(entity::attendance::Column::MarkedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts marked student-days for a class within a day range
    ///
    /// # Arguments
    /// - `class_id`: Class ID
    /// - `from_day`: First day of the range, inclusive
    /// - `until_day`: End of the range, exclusive
    ///
    /// # Returns
    /// - `Ok(count)`: Number of entries in the range across the class
    /// - `Err(DbErr)`: Database error
    pub async fn count_entries_for_class(
        &self,
        class_id: i32,
        from_day: NaiveDate,
        until_day: NaiveDate,
    ) -> Result<u64, DbErr> {
        entity::prelude::AttendanceEntry::find()
            .join(
                JoinType::InnerJoin,
                entity::attendance_entry::Relation::Attendance.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::attendance::Relation::Student.def(),
            )
            .filter(entity::student::Column::ClassId.eq(class_id))
            .filter(entity::attendance_entry::Column::Day.gte(from_day))
            .filter(entity::attendance_entry::Column::Day.lt(until_day))
            .count(self.db)
            .await
    }

    /// Counts present student-days for a class within a day range
    ///
    /// # Arguments
    /// - `class_id`: Class ID
    /// - `from_day`: First day of the range, inclusive
    /// - `until_day`: End of the range, exclusive
    ///
    /// # Returns
    /// - `Ok(count)`: Number of present entries in the range across the class
    /// - `Err(DbErr)`: Database error
    pub async fn count_present_for_class(
        &self,
        class_id: i32,
        from_day: NaiveDate,
        until_day: NaiveDate,
    ) -> Result<u64, DbErr> {
        entity::prelude::AttendanceEntry::find()
            .join(
                JoinType::InnerJoin,
                entity::attendance_entry::Relation::Attendance.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::attendance::Relation::Student.def(),
            )
            .filter(entity::student::Column::ClassId.eq(class_id))
            .filter(entity::attendance_entry::Column::Day.gte(from_day))
            .filter(entity::attendance_entry::Column::Day.lt(until_day))
            .filter(entity::attendance_entry::Column::Present.eq(true))
            .count(self.db)
            .await
    }
}
