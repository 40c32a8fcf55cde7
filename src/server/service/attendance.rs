//! Attendance ledger service.
//!
//! This module provides the `AttendanceService` for marking daily attendance
//! and for the nightly rollover that defaults unmarked students to absent.
//! Each student has one ledger: a head row carrying the latest mark and one
//! entry per marked calendar day. A mark is an upsert keyed by the day the
//! instant falls on in the school's reference timezone, so re-marking a day
//! rewrites the existing entry instead of appending a second one.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{attendance::AttendanceRepository, student::StudentRepository},
    error::AppError,
    model::attendance::AttendanceLedger,
    util::time::{day_in_tz, day_start_utc},
};

/// Service providing attendance marking and rollover operations.
pub struct AttendanceService<'a> {
    /// Database connection for ledger access via repositories
    db: &'a DatabaseConnection,
    /// Offset of the school's local clock from UTC
    timezone: FixedOffset,
}

impl<'a> AttendanceService<'a> {
    /// Creates a new AttendanceService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `timezone` - Reference timezone deciding which day a mark falls on
    ///
    /// # Returns
    /// - `AttendanceService` - New service instance
    pub fn new(db: &'a DatabaseConnection, timezone: FixedOffset) -> Self {
        Self { db, timezone }
    }

    /// Marks a student present or absent
    ///
    /// Upserts the entry for the calendar day `at` falls on in the reference
    /// timezone and updates the denormalized head in the same transaction,
    /// so the head and the day entries can never drift apart. A ledger is
    /// opened on first mark for students registered before ledgers existed.
    ///
    /// # Arguments
    /// - `student_id`: Student ID
    /// - `at`: Instant of the mark; decides the calendar day
    /// - `present`: Whether the student was present
    ///
    /// # Returns
    /// - `Ok(AttendanceLedger)`: The full ledger after the mark
    /// - `Err(AppError)`: Not-found or database error
    pub async fn mark(
        &self,
        student_id: i32,
        at: DateTime<Utc>,
        present: bool,
    ) -> Result<AttendanceLedger, AppError> {
        StudentRepository::new(self.db)
            .get_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

        let day = day_in_tz(at, self.timezone);

        let txn = self.db.begin().await?;
        let repo = AttendanceRepository::new(&txn);

        let head = match repo.get_by_student(student_id).await? {
            Some(head) => head,
            None => repo.create(student_id, false, at).await?,
        };

        repo.upsert_day(head.id, day, present, at).await?;
        let head = repo.update_head(head.id, present, at).await?;
        let entries = repo.entries_for(head.id).await?;

        txn.commit().await?;

        Ok(AttendanceLedger::from_entity(head, entries))
    }

    /// Gets a student's full attendance ledger
    ///
    /// # Arguments
    /// - `student_id`: Student ID
    ///
    /// # Returns
    /// - `Ok(AttendanceLedger)`: The ledger with all day entries
    /// - `Err(AppError)`: Not-found or database error
    pub async fn get(&self, student_id: i32) -> Result<AttendanceLedger, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let head = repo.get_by_student(student_id).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Attendance ledger for student {} not found",
                student_id
            ))
        })?;
        let entries = repo.entries_for(head.id).await?;

        Ok(AttendanceLedger::from_entity(head, entries))
    }

    /// Defaults students with no mark for `as_of` to absent
    ///
    /// Flips the denormalized flag on every ledger whose latest mark came
    /// before the start of `as_of` in the reference timezone. Day entries
    /// are never touched: yesterday's history stays intact, only the
    /// "current status" reading changes. Running this twice on the same day
    /// changes nothing.
    ///
    /// # Arguments
    /// - `as_of`: Calendar day the rollover is for, usually today
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of ledgers flipped to absent
    /// - `Err(AppError)`: Database error
    pub async fn rollover_absences(&self, as_of: NaiveDate) -> Result<u64, AppError> {
        let cutoff = day_start_utc(as_of, self.timezone);

        let flipped = AttendanceRepository::new(self.db)
            .rollover_stale(cutoff)
            .await?;

        Ok(flipped)
    }
}
