//! Attendance reporting service.
//!
//! Read-side of the attendance subsystem: aggregates the day-level entries
//! of a class's students into monthly present/absent counts and a
//! percentage. Pure queries, no mutation, safe to recompute at any time.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait};

use chrono::NaiveDate;

use crate::server::{
    data::attendance::AttendanceRepository, error::AppError,
    model::attendance::ClassMonthlyReport, util::money::round2,
};

/// Service providing attendance aggregation queries.
pub struct AttendanceReportService<'a> {
    /// Database connection for aggregation queries via repositories
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceReportService<'a> {
    /// Creates a new AttendanceReportService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AttendanceReportService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports a class's attendance for one calendar month
    ///
    /// Counts the marked student-days of the class within the month and the
    /// share of them that were present. A month with no marks at all
    /// reports zero percent rather than dividing by zero.
    ///
    /// # Arguments
    /// - `class_id`: Class ID
    /// - `year`: Calendar year of the report
    /// - `month`: Calendar month, 1 through 12
    ///
    /// # Returns
    /// - `Ok(ClassMonthlyReport)`: Counts and percentage for the month
    /// - `Err(AppError)`: Validation, not-found, or database error
    pub async fn class_monthly_report(
        &self,
        class_id: i32,
        year: i32,
        month: u32,
    ) -> Result<ClassMonthlyReport, AppError> {
        let from_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            AppError::Validation(format!("{}-{} is not a calendar month", year, month))
        })?;
        let until_day = match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
        }
        .ok_or_else(|| {
            AppError::Validation(format!("{}-{} is not a calendar month", year, month))
        })?;

        entity::prelude::SchoolClass::find_by_id(class_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Class {} not found", class_id)))?;

        let repo = AttendanceRepository::new(self.db);
        let total_days = repo
            .count_entries_for_class(class_id, from_day, until_day)
            .await?;
        let present_days = repo
            .count_present_for_class(class_id, from_day, until_day)
            .await?;

        let attendance_percentage = if total_days == 0 {
            Decimal::ZERO
        } else {
            round2(Decimal::from(present_days) * Decimal::ONE_HUNDRED / Decimal::from(total_days))
        };

        Ok(ClassMonthlyReport {
            class_id,
            year,
            month,
            total_days,
            present_days,
            attendance_percentage,
        })
    }
}
